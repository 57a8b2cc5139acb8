use crate::fact::{FactClient, FactOptions};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use futures::future::join_all;
use numclass_core::classify::{
    classify, parse_number_param, Classification, ErrorPayload, RejectedNumber,
};
use numclass_core::fact::FALLBACK_FACT;
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "classify")]
#[command(about = "Classify integers from the command line")]
pub struct App {
    /// Integers to classify
    #[arg(value_name = "NUMBER", required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the trivia lookup and use the fallback fact
    #[arg(long)]
    pub no_fact: bool,

    #[clap(flatten)]
    pub fact: FactOptions,
}

/// Result for a single command line argument
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    Classified(Classification),
    Rejected(ErrorPayload),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let facts = if app.no_fact {
        None
    } else {
        let client = app.fact.client()?;
        if global.verbose {
            eprintln!("Trivia service: {}", client.base_url());
        }
        Some(client)
    };

    let outcomes = classify_all(&app.numbers, facts.as_ref()).await;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_table(&outcomes);
    }

    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Rejected(_)))
        .count();
    if rejected > 0 {
        return Err(eyre!(
            "{rejected} of {} inputs could not be classified",
            outcomes.len()
        ));
    }

    Ok(())
}

/// Validate and classify every input, looking facts up concurrently
///
/// Order of the outcomes matches the order of `inputs`.
pub async fn classify_all(inputs: &[String], facts: Option<&FactClient>) -> Vec<Outcome> {
    let futures = inputs.iter().map(|input| async move {
        let n = match parse_number_param(Some(input.as_str())) {
            Ok(n) => n,
            Err(e) => return Outcome::Rejected(e.payload()),
        };

        let fun_fact = match facts {
            Some(client) => client.fetch_or_fallback(n).await,
            None => FALLBACK_FACT.to_string(),
        };

        Outcome::Classified(classify(n, fun_fact))
    });

    join_all(futures).await
}

fn print_table(outcomes: &[Outcome]) {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "Number".bold(),
        "Prime".bold(),
        "Perfect".bold(),
        "Properties".bold(),
        "Digit Sum".bold()
    ]);

    for outcome in outcomes {
        if let Outcome::Classified(c) = outcome {
            let properties = c
                .properties
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(prettytable::row![
                c.number,
                yes_no(c.is_prime),
                yes_no(c.is_perfect),
                properties,
                c.digit_sum
            ]);
        }
    }

    table.printstd();

    for outcome in outcomes {
        match outcome {
            Outcome::Classified(c) => {
                println!("{} {}", f!("{}:", c.number).as_str().cyan(), c.fun_fact)
            }
            Outcome::Rejected(payload) => {
                let input = match &payload.number {
                    RejectedNumber::Parsed(n) => n.to_string(),
                    RejectedNumber::Raw(raw) => f!("{raw:?}"),
                };
                eprintln!("{} {input}: {}", "rejected".red().bold(), payload.message);
            }
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
