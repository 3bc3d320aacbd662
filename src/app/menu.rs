use crate::core::converter::{ConversionOutcome, ConverterService};
use crate::domain::ports::RateProvider;
use crate::utils::error::{CambioError, Result};
use std::io::{self, BufRead, Write};

// Menu slots after the predefined options, in order.
const EXTRA_ENTRIES: [&str; 4] = [
    "Custom conversion",
    "Show conversion history",
    "Show statistics",
    "Clear history",
];

/// Runs the interactive menu until the user quits or stdin closes.
/// Conversion failures are reported and the loop keeps going.
pub async fn run<P: RateProvider>(
    service: &mut ConverterService<P>,
    history_limit: usize,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== CURRENCY CONVERTER ===");
    println!("Live quotes from ExchangeRate-API.");

    loop {
        print_menu(service);
        let Some(line) = read_line(&mut lines)? else {
            break;
        };
        let Ok(choice) = line.trim().parse::<usize>() else {
            println!("Please enter a number from the menu.");
            continue;
        };

        let option_count = service.options().len();
        match choice {
            0 => break,
            n if n <= option_count => {
                if let Err(e) = run_predefined(service, n, &mut lines).await {
                    report_error(&e);
                }
            }
            n if n == option_count + 1 => {
                if let Err(e) = run_custom(service, &mut lines).await {
                    report_error(&e);
                }
            }
            n if n == option_count + 2 => {
                println!("\n{}", service.history().formatted_history(history_limit));
            }
            n if n == option_count + 3 => {
                println!("\n{}", service.history().formatted_statistics());
            }
            n if n == option_count + 4 => {
                service.history_mut().clear();
                println!("History cleared.");
            }
            _ => println!("Unknown option, try again."),
        }
    }

    println!("\nThanks for using the currency converter!");
    Ok(())
}

fn print_menu<P: RateProvider>(service: &ConverterService<P>) {
    println!("\n=== MAIN MENU ===");
    for (i, option) in service.options().iter().enumerate() {
        println!("{}. {}", i + 1, option.description);
    }
    let mut slot = service.options().len();
    for entry in EXTRA_ENTRIES {
        slot += 1;
        println!("{}. {}", slot, entry);
    }
    println!("0. Quit");
    print!("\nYour choice: ");
}

async fn run_predefined<P: RateProvider>(
    service: &mut ConverterService<P>,
    option: usize,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let Some(amount) = read_amount(lines)? else {
        return Ok(());
    };

    println!("\nFetching live rates...");
    let outcome = service.convert_option(option, amount).await?;
    print_outcome(&outcome);
    Ok(())
}

async fn run_custom<P: RateProvider>(
    service: &mut ConverterService<P>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    print!("Source currency code (e.g. USD): ");
    let Some(from) = read_line(lines)? else {
        return Ok(());
    };
    print!("Target currency code (e.g. BRL): ");
    let Some(to) = read_line(lines)? else {
        return Ok(());
    };
    let Some(amount) = read_amount(lines)? else {
        return Ok(());
    };

    let from = from.trim().to_uppercase();
    let to = to.trim().to_uppercase();

    println!("\nFetching live rates...");
    let outcome = service.convert(&from, &to, amount).await?;
    print_outcome(&outcome);
    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn read_amount(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<f64>> {
    loop {
        print!("Amount to convert: ");
        let Some(line) = read_line(lines)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => println!("Please enter a numeric amount."),
        }
    }
}

fn print_outcome(outcome: &ConversionOutcome) {
    println!("\n=== RESULT ===");
    println!("{}", outcome.record.format_line());
    println!("\nBase currency: {}", outcome.rates.base_code);
    if let Some(updated) = &outcome.rates.time_last_update_utc {
        println!("Rates updated: {}", updated);
    }
    if let Some(next) = &outcome.rates.time_next_update_utc {
        println!("Next update: {}", next);
    }
}

fn report_error(err: &CambioError) {
    match err {
        CambioError::ProviderUnavailableError(_) => eprintln!("Connection error: {}", err),
        CambioError::ProviderResponseError { .. } => eprintln!("API error: {}", err),
        CambioError::RateNotFoundError { .. } => eprintln!("Rate not available: {}", err),
        _ => eprintln!("Conversion failed: {}", err),
    }
}
