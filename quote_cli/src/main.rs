//! # RenoQuote CLI
//!
//! Terminal front-end for the quotation engine. Walks one flooring estimate
//! end-to-end: prompts for the room, resolves prices, prints the itemized
//! quote and dumps the result as JSON for scripting.

use std::io::{self, BufRead, Write};

use quote_core::calculations::{CalculationInput, FlooringInput};
use quote_core::overrides::OverrideMap;
use quote_core::prices::{material, resolve_prices, PriceOverrides};
use quote_core::quotation::{build_item, ItemMode, Quotation};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
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

fn main() {
    println!("RenoQuote CLI - Renovation Cost Estimator");
    println!("=========================================");
    println!();

    let place_name = prompt_string("Place name [Living Room]: ", "Living Room");
    let length = prompt_f64("Room length (m) [4.0]: ", 4.0);
    let breadth = prompt_f64("Room breadth (m) [3.0]: ", 3.0);
    let doors = prompt_f64("Number of doors [1]: ", 1.0).max(0.0) as u32;
    let skirting = prompt_string("Skirting needed? (yes/no) [yes]: ", "yes");
    let floor_type = prompt_string("Floor type (vinyl/spc) [vinyl]: ", "vinyl");
    let floor_price = prompt_f64("Floor price per sqm (0 = default): ", 0.0);

    println!();
    println!("Calculating {} flooring for {}...", floor_type, place_name);
    println!();

    let mut price_overrides = PriceOverrides::new();
    if floor_price > 0.0 {
        price_overrides.set(floor_type.as_str(), floor_price);
    }
    // Profiles only get quoted when priced; a flat default keeps the demo useful
    price_overrides.set(material::DOOR_PROFILE, 2500.0);

    let input = CalculationInput::Flooring(FlooringInput {
        length,
        breadth,
        doors,
        skirting_needed: skirting.eq_ignore_ascii_case("yes"),
        floor_type,
    });
    let prices = resolve_prices(input.category(), &price_overrides);
    let overrides = OverrideMap::new();

    match input.calculate(&prices, &overrides) {
        Ok(calculated) => {
            println!("═══════════════════════════════════════");
            println!("  QUOTATION - {}", place_name);
            println!("═══════════════════════════════════════");
            println!();
            for line in calculated.lines() {
                println!(
                    "  {:<24} {:>7} {:<5} = {:>12.2}",
                    line.label, line.qty, line.unit, line.subtotal
                );
            }
            println!();
            println!("═══════════════════════════════════════");
            println!("  TOTAL: {:.2}", calculated.area_total());
            println!("═══════════════════════════════════════");

            let mut quotation = Quotation::new("CLI demo");
            quotation.add_item(build_item(
                place_name,
                ItemMode::Guided,
                input,
                prices,
                calculated,
                overrides,
            ));

            println!();
            println!("JSON Output (for scripting):");
            if let Ok(json) = serde_json::to_string_pretty(quotation.items()) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
