//! # Carport Quoting CLI
//!
//! Terminal front end for the carport engine: prompts for the overall
//! dimensions and an optional shed, prints the bill of materials with
//! prices, writes both technical drawings as SVG files next to the
//! working directory, and dumps the full quote as JSON.

use std::io::{self, BufRead, Write};

use carport_core::carport::{Carport, RoofType, Shed, ShedPlacement};
use carport_core::catalog::StandardCatalog;
use carport_core::quote::Quote;

const TOP_VIEW_FILE: &str = "carport_top.svg";
const SIDE_VIEW_FILE: &str = "carport_side.svg";

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    let answer = prompt_string(prompt, if default { "j" } else { "n" });
    matches!(answer.to_lowercase().as_str(), "j" | "ja" | "y" | "yes")
}

fn prompt_shed() -> Option<Shed> {
    if !prompt_yes_no("Med redskabsskur? (j/n) [n]: ", false) {
        return None;
    }

    let length = prompt_u32("Skur laengde (cm) [210]: ", 210);
    let width = prompt_u32("Skur bredde (cm) [530]: ", 530);
    let placement = match prompt_u32(
        "Placering: 1=fuld bredde, 2=venstre, 3=hoejre [1]: ",
        1,
    ) {
        2 => ShedPlacement::Left,
        3 => ShedPlacement::Right,
        _ => ShedPlacement::FullWidth,
    };

    Some(Shed::new(length, width, placement))
}

fn main() {
    println!("Carport Quoting - Geometry & Quantity Engine");
    println!("============================================");
    println!();

    let customer = prompt_string("Kundenavn [Kunde]: ", "Kunde");
    let length = prompt_u32("Carport laengde (cm) [780]: ", 780);
    let width = prompt_u32("Carport bredde (cm) [600]: ", 600);
    let shed = prompt_shed();

    let mut carport = Carport::new(length, width, RoofType::Flat);
    if let Some(shed) = shed {
        carport = carport.with_shed(shed);
    }

    println!();
    println!("Beregner styklisten...");
    println!();

    let catalog = StandardCatalog::new();
    match Quote::build(customer, carport, &catalog) {
        Ok(quote) => {
            print_bill(&quote);
            write_drawings(&quote);

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&quote) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Fejl: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn print_bill(quote: &Quote) {
    println!("=======================================================================");
    println!("  STYKLISTE - {}", quote.meta.customer);
    println!("=======================================================================");
    println!();
    println!(
        "Carport: {} x {} cm{}",
        quote.carport.length_cm,
        quote.carport.width_cm,
        match &quote.carport.shed {
            Some(shed) => format!(
                ", skur {} x {} cm ({})",
                shed.length_cm,
                shed.width_cm,
                shed.placement.display_name()
            ),
            None => String::new(),
        }
    );
    println!();
    println!(
        "{:<38} {:>5} {:>6} {:>10}  {}",
        "Materiale", "Antal", "Enhed", "Pris", "Anvendelse"
    );
    println!("{}", "-".repeat(100));

    for line in &quote.lines {
        println!(
            "{:<38} {:>5} {:>6} {:>10.2}  {}",
            line.variant.name, line.quantity, line.variant.unit, line.line_total(), line.usage
        );
    }

    println!("{}", "-".repeat(100));
    println!("{:<51} {:>10.2} kr.", "I alt", quote.total_price);
}

fn write_drawings(quote: &Quote) {
    println!();
    for (path, svg) in [
        (TOP_VIEW_FILE, &quote.top_view_svg),
        (SIDE_VIEW_FILE, &quote.side_view_svg),
    ] {
        match std::fs::write(path, svg) {
            Ok(()) => println!("Tegning skrevet: {}", path),
            Err(e) => eprintln!("Kunne ikke skrive {}: {}", path, e),
        }
    }
}
