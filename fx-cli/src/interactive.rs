//! Interactive prompt/menu front end.
//!
//! A plain console loop over the engine API: main menu, currency pickers
//! over the supported list, amount and date prompts with re-asking on bad
//! input. The engine revalidates everything; the prompts only exist to
//! catch mistakes before a request is made.

use std::io::{self, Write};

use anyhow::Result;
use rust_decimal::Decimal;

use fx_engine::{DATE_FORMAT, FxService};
use fx_types::RateProvider;

/// Runs the menu loop until the user confirms quitting.
pub async fn run<P: RateProvider>(service: &FxService<P>) -> Result<()> {
    println!(
        "------------------------------FX Conversion System------------------------------"
    );

    loop {
        println!("1. FX Conversion");
        println!("2. Quit");

        let option = prompt_option(
            "Select an option: ",
            &["1", "2"],
            "Invalid option selected. Select an option: ",
        )?;

        match option.as_str() {
            "1" => conversion_menu(service).await?,
            _ => {
                let confirm = prompt_option(
                    "Are you sure you want to quit the program? (Y/N): ",
                    &["Y", "N"],
                    "Invalid option selected. Select an option: ",
                )?;
                if confirm.eq_ignore_ascii_case("y") {
                    break;
                }
            }
        }
    }

    println!("\nExiting the program.");
    Ok(())
}

async fn conversion_menu<P: RateProvider>(service: &FxService<P>) -> Result<()> {
    println!();
    println!(
        "**********************************FX Converter**********************************"
    );

    let supported: Vec<String> = service
        .supported_currencies()
        .iter()
        .map(|code| code.as_str().to_string())
        .collect();

    println!();
    let source = prompt_option(
        &format!(
            "Available options: {}\nSelect the currency to convert from: ",
            supported.join(", ")
        ),
        &supported,
        "Invalid selection. Select a currency from the available options: ",
    )?
    .to_uppercase();

    // The target picker drops the chosen source so the pair cannot be
    // identical; the engine enforces this again anyway.
    let remaining: Vec<String> = supported
        .iter()
        .filter(|code| !code.eq_ignore_ascii_case(&source))
        .cloned()
        .collect();

    println!();
    let target = prompt_option(
        &format!(
            "Available options: {}\nSelect the currency to convert to: ",
            remaining.join(", ")
        ),
        &remaining,
        "Invalid selection. Select a currency from the available options: ",
    )?
    .to_uppercase();

    let amount = prompt_amount(&source)?;
    let date = prompt_date(service)?;

    let response = service.convert(&source, &target, amount, Some(&date)).await;

    println!("\nConversion result:");
    match response.into_result() {
        Ok(conversion) => {
            if !conversion.direct {
                println!(
                    "No direct pairing between '{source}' and '{target}' is available. An indirect conversion was performed."
                );
            }
            println!("{conversion}");
        }
        Err(err) => println!("{}", err.message),
    }
    println!();

    Ok(())
}

fn prompt_amount(source: &str) -> Result<Decimal> {
    print!("\nEnter the amount to convert ({source}): ");
    io::stdout().flush()?;

    loop {
        match read_line()?.trim().parse::<Decimal>() {
            Ok(amount) => return Ok(amount),
            Err(_) => {
                print!("Invalid amount entered. Enter a valid decimal: ");
                io::stdout().flush()?;
            }
        }
    }
}

fn prompt_date<P: RateProvider>(service: &FxService<P>) -> Result<String> {
    let today = chrono::Local::now()
        .date_naive()
        .format(DATE_FORMAT)
        .to_string();

    println!("\nConversion date: {today}");
    print!("Press [Enter] to use conversion date above or input date(YYYY-MM-DD): ");
    io::stdout().flush()?;

    loop {
        let line = read_line()?;
        let line = line.trim();

        if line.is_empty() {
            return Ok(today);
        }
        if service.validate_date(line) {
            return Ok(line.to_string());
        }

        print!("Invalid conversion date '{line}' entered. Enter a valid date(YYYY-MM-DD): ");
        io::stdout().flush()?;
    }
}

/// Prompts until the input matches one of the options (case-insensitive).
fn prompt_option(prompt: &str, options: &[impl AsRef<str>], invalid: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    loop {
        let input = read_line()?.trim().to_string();

        if options
            .iter()
            .any(|option| option.as_ref().eq_ignore_ascii_case(&input))
        {
            return Ok(input);
        }

        print!("{invalid}");
        io::stdout().flush()?;
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line)
}
