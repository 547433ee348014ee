//! Demonstration walkthrough.
//!
//! Mirrors the worked examples the calculators are typically shown with:
//! present value of a simple and a bond-like series, future value
//! scenarios, a compounding-frequency comparison, and the validation
//! failures each calculator reports.

use anyhow::Result;

use fincalc_core::prelude::*;

use crate::output::{print_error, print_header, print_section, print_success};

/// Execute the demo command.
pub fn execute() -> Result<()> {
    print_header("Policy-Based Financial Calculator");

    present_value_examples()?;
    future_value_examples()?;
    rate_conversion_examples()?;
    error_handling_examples();

    print_header("Demo Complete");
    Ok(())
}

fn present_value_examples() -> Result<()> {
    print_section("1. Present Value");

    let calc = PresentValueCalculator::new();

    let cash_flows = [100.0, 200.0, 300.0];
    let discount_rate = 0.05;
    let pv = calc.calculate((discount_rate, &cash_flows[..]))?;

    println!("Cash flows: {:?}", cash_flows);
    println!("Discount rate: {:.1}%", discount_rate * 100.0);
    println!("Present value: ${:.2}", pv);

    // Ten coupon payments plus a final payment including principal.
    let mut bond_flows = vec![50.0; 10];
    bond_flows.push(1050.0);
    let pv_bond = calc.calculate((0.04, &bond_flows[..]))?;

    println!();
    println!("Bond valuation (4% discount):");
    println!("  Coupon payments: 10 x $50");
    println!("  Final payment: $1050 (including principal)");
    println!("  Present value: ${:.2}", pv_bond);

    Ok(())
}

fn future_value_examples() -> Result<()> {
    print_section("2. Future Value");

    let calc = FutureValueCalculator::new();

    let principal = 1000.0;
    let interest_rate = 0.05;
    let periods = 10;
    let fv = calc.calculate((principal, interest_rate, periods))?;

    println!("Principal: ${:.2}", principal);
    println!("Interest rate: {:.1}%", interest_rate * 100.0);
    println!("Periods: {}", periods);
    println!("Future value: ${:.2}", fv);

    println!();
    println!("Investment scenarios (10 periods, $1000 principal):");
    let scenarios = [
        (0.05, "Conservative"),
        (0.08, "Moderate"),
        (0.12, "Aggressive"),
    ];
    for (rate, label) in scenarios {
        let fv_scenario = calc.calculate((1000.0, rate, 10))?;
        println!("  {:12} ({:2.0}%): ${:.2}", label, rate * 100.0, fv_scenario);
    }

    Ok(())
}

fn rate_conversion_examples() -> Result<()> {
    print_section("3. Effective Annual Rate");

    let calc = RateConversionCalculator::new();

    let nominal_rate = 0.12;
    let ear = calc.calculate((nominal_rate, 12))?;

    println!("Nominal rate: {:.1}%", nominal_rate * 100.0);
    println!("Compounding: 12 times per year (monthly)");
    println!("Effective annual rate: {:.4}%", ear * 100.0);

    println!();
    println!("Compounding comparison (6% nominal rate):");
    let frequencies = [
        (1, "Annual"),
        (2, "Semi-annual"),
        (4, "Quarterly"),
        (12, "Monthly"),
        (365, "Daily"),
    ];
    for (periods, label) in frequencies {
        let ear_result = calc.calculate((0.06, periods))?;
        println!("  {:12}: {:.4}%", label, ear_result * 100.0);
    }

    Ok(())
}

fn error_handling_examples() {
    print_section("4. Validation Failures");

    let pv = PresentValueCalculator::new();
    let fv = FutureValueCalculator::new();
    let rate = RateConversionCalculator::new();

    let cases: [(&str, CalcResult<f64>); 4] = [
        ("empty cash flows", pv.calculate((0.05, &[][..]))),
        ("discount rate below -1", pv.calculate((-1.5, &[100.0][..]))),
        ("negative principal", fv.calculate((-1000.0, 0.05, 10))),
        ("zero compounding periods", rate.calculate((0.12, 0))),
    ];

    for (label, outcome) in cases {
        match outcome {
            Ok(value) => print_error(&format!("{}: unexpectedly succeeded with {}", label, value)),
            Err(e) => print_success(&format!("{}: rejected ({})", label, e)),
        }
    }
}
