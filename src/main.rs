use log::debug;

use signfit::model::{DigitCatalog, SearchFlags};
use signfit::sizing::find_best_configuration;

const USAGE: &str =
    "usage: signfit <allowed-sq-ft> [--changer 2|4] [--third-cabinet] [--separate] [--ratio R]";

fn parse_flags(args: &[String]) -> Result<(f64, SearchFlags), String> {
    let mut allowed_sq_ft = None;
    let mut flags = SearchFlags::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--changer" => {
                let value = iter.next().ok_or("--changer needs a value")?;
                flags.changer_type = value.parse()?;
            }
            "--third-cabinet" => flags.include_third_cabinet = true,
            "--separate" => flags.separate_cabinets = true,
            "--ratio" => {
                let value = iter.next().ok_or("--ratio needs a value")?;
                flags.maverik_height_ratio = value
                    .parse::<f64>()
                    .map_err(|_| format!("bad ratio {:?}", value))?;
            }
            other if allowed_sq_ft.is_none() => {
                allowed_sq_ft = Some(
                    other
                        .parse::<f64>()
                        .map_err(|_| format!("bad area {:?}", other))?,
                );
            }
            other => return Err(format!("unexpected argument {:?}", other)),
        }
    }

    let allowed_sq_ft = allowed_sq_ft.ok_or_else(|| USAGE.to_string())?;
    Ok((allowed_sq_ft, flags))
}

fn run(args: &[String]) -> Result<(), String> {
    let (allowed_sq_ft, flags) = parse_flags(args)?;
    debug!("searching {} sq ft with {:?}", allowed_sq_ft, flags);

    let catalog = DigitCatalog::standard();
    let result =
        find_best_configuration(allowed_sq_ft, &catalog, &flags).map_err(|e| e.to_string())?;

    match result {
        Some(best) => {
            let json = serde_json::to_string_pretty(&best).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
        None => {
            // A budget too small for the smallest digit is an answer,
            // not an error.
            println!("no configuration fits within {} sq ft", allowed_sq_ft);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(message) = run(&args) {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}
