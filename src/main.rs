use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::Result;

use eventide::EventideError;
use eventide::ai::{AiProvider, build_suggestion_prompt};
use eventide::cards::render_cards;
use eventide::cli::{Cli, Command, dollars_to_cents};
use eventide::config::load_config;
use eventide::event::Wizard;
use eventide::event::types::EventKind;
use eventide::guest::{Guest, compose_invitation};
use eventide::payment::{PaymentMethod, PaymentRequest, process_payment};
use eventide::suggestion::{Suggestion, segment};
use eventide::vendor::match_vendors;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Segment { file, json } => run_segment(file, json)?,
        Command::Suggest {
            name,
            kind,
            date,
            venue,
            guests,
            budget,
            json,
        } => run_suggest(&name, kind, &date, venue.as_deref(), guests, budget, json)?,
        Command::Vendors { kind, budget, json } => run_vendors(kind, budget, json)?,
        Command::Invite {
            name,
            kind,
            date,
            venue,
            guest,
            email,
        } => run_invite(&name, kind, &date, venue.as_deref(), guest, email)?,
        Command::Pay {
            amount,
            last4,
            reference,
        } => run_pay(amount, last4, reference)?,
    }

    Ok(())
}

/// Segment saved response text from a file or stdin
fn run_segment(file: Option<PathBuf>, json: bool) -> Result<(), EventideError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    print_suggestions(&segment(&text), json)
}

/// Drive the wizard from flags, call the provider, segment, print cards
fn run_suggest(
    name: &str,
    kind: EventKind,
    date: &str,
    venue: Option<&str>,
    guests: u32,
    budget: f64,
    json: bool,
) -> Result<(), EventideError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        EventideError::InvalidArgument {
            field: "date".to_string(),
            message: format!("expected YYYY-MM-DD: {e}"),
        }
    })?;

    let mut wizard = Wizard::new();
    wizard.basics(name, kind)?;
    wizard.schedule(date, venue)?;
    wizard.guests_and_budget(guests, dollars_to_cents(budget))?;
    let event = wizard.finish()?;

    let config = load_config();
    let provider = AiProvider::from_config(&config.ai)?;
    let prompt = build_suggestion_prompt(&event);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let response = runtime.block_on(provider.complete(&prompt))?;
    log::debug!("provider returned {} bytes", response.len());

    print_suggestions(&segment(&response), json)
}

fn run_vendors(kind: EventKind, budget: f64, json: bool) -> Result<(), EventideError> {
    let vendors = match_vendors(kind, dollars_to_cents(budget));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&vendors).map_err(std::io::Error::other)?
        );
        return Ok(());
    }

    if vendors.is_empty() {
        println!("No vendors match that kind and budget.");
        return Ok(());
    }
    for vendor in vendors {
        println!(
            "{:<24} {:<12} ${:>9.2}  {:.1}/5.0",
            vendor.name,
            format!("{:?}", vendor.service).to_lowercase(),
            vendor.price_cents as f64 / 100.0,
            vendor.rating_tenths as f64 / 10.0,
        );
    }
    Ok(())
}

fn run_invite(
    name: &str,
    kind: EventKind,
    date: &str,
    venue: Option<&str>,
    guest: String,
    email: String,
) -> Result<(), EventideError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        EventideError::InvalidArgument {
            field: "date".to_string(),
            message: format!("expected YYYY-MM-DD: {e}"),
        }
    })?;

    let mut wizard = Wizard::new();
    wizard.basics(name, kind)?;
    wizard.schedule(date, venue)?;
    wizard.guests_and_budget(1, 0)?;
    let event = wizard.finish()?;

    let invitation = compose_invitation(&event, &Guest { name: guest, email });
    println!("To: {} <{}>", invitation.guest.name, invitation.guest.email);
    println!();
    println!("{}", invitation.message);
    Ok(())
}

fn run_pay(amount: f64, last4: Option<String>, reference: String) -> Result<(), EventideError> {
    let method = match last4 {
        Some(last4) => {
            if last4.len() != 4 || !last4.chars().all(|c| c.is_ascii_digit()) {
                return Err(EventideError::InvalidArgument {
                    field: "last4".to_string(),
                    message: "expected exactly 4 digits".to_string(),
                });
            }
            PaymentMethod::Card { last4 }
        }
        None => PaymentMethod::BankTransfer,
    };

    let transaction = process_payment(&PaymentRequest {
        amount_cents: dollars_to_cents(amount),
        method,
        reference,
    })?;

    println!(
        "Payment accepted: {} for ${:.2} (ref {})",
        transaction.id,
        transaction.amount_cents as f64 / 100.0,
        transaction.reference,
    );
    Ok(())
}

fn print_suggestions(suggestions: &[Suggestion], json: bool) -> Result<(), EventideError> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(suggestions).map_err(std::io::Error::other)?
        );
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions found in the input.");
        return Ok(());
    }
    print!("{}", render_cards(suggestions));
    Ok(())
}
