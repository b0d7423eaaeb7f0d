//! # Vesselcalc CLI Application
//!
//! Terminal interface for ASME VIII Div.1 nozzle compliance checks.
//! Prompts for the design parameters (enter accepts the default), runs
//! one evaluation, and prints the report sections followed by a JSON
//! block for API/LLM use.

use std::io::{self, BufRead, Write};

use vessel_core::categories::{EquipmentCategory, HeadType, ServiceCategory};
use vessel_core::report::Verdict;
use vessel_core::{evaluate, DesignInput};

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

fn prompt_choice<T: Copy + std::fmt::Display>(label: &str, options: &[T]) -> T {
    println!("{}", label);
    for (i, option) in options.iter().enumerate() {
        println!("  [{}] {}", i + 1, option);
    }
    let index = prompt_f64("Select [1]: ", 1.0) as usize;
    *options.get(index.saturating_sub(1)).unwrap_or(&options[0])
}

fn main() {
    println!("Vesselcalc CLI - ASME VIII Div.1 Nozzle Compliance");
    println!("==================================================");
    println!();

    let pressure = prompt_f64("Design pressure (MPa) [2.0]: ", 2.0);
    let shell_d = prompt_f64("Shell diameter (mm) [1000.0]: ", 1000.0);
    let shell_t = prompt_f64("Shell thickness (mm) [12.0]: ", 12.0);
    let head_t = prompt_f64("Head thickness (mm) [12.0]: ", 12.0);
    let nozzle_d = prompt_f64("Nozzle diameter (mm) [200.0]: ", 200.0);
    let nozzle_t = prompt_f64("Nozzle thickness (mm) [10.0]: ", 10.0);
    let nozzle_od = prompt_f64("Nozzle OD (mm) [114.3]: ", 114.3);
    let ca = prompt_f64("Corrosion allowance (mm) [1.5]: ", 1.5);

    let s_shell = prompt_f64("Shell allowable stress (MPa) [138.0]: ", 138.0);
    let s_head = prompt_f64("Head allowable stress (MPa) [138.0]: ", 138.0);
    let s_nozzle = prompt_f64("Nozzle allowable stress (MPa) [118.0]: ", 118.0);
    let e_shell = prompt_f64("Shell joint efficiency [1.0]: ", 1.0);
    let e_head = prompt_f64("Head joint efficiency [1.0]: ", 1.0);
    let e_nozzle = prompt_f64("Nozzle joint efficiency [1.0]: ", 1.0);

    let head_type = prompt_choice("Head type:", &HeadType::ALL);
    let equipment = prompt_choice("Equipment type:", &EquipmentCategory::ALL);
    let service = prompt_choice("Service type:", &ServiceCategory::ALL);

    let custom_min = prompt_f64("Custom minimum thickness (mm, 0 = none) [0.0]: ", 0.0);

    println!();
    println!("Applied loads (enter for none):");
    let fx = prompt_f64("  Shear force X (N) [0.0]: ", 0.0);
    let fy = prompt_f64("  Shear force Y (N) [0.0]: ", 0.0);
    let fz = prompt_f64("  Axial force Z (N) [0.0]: ", 0.0);
    let mx = prompt_f64("  Bending moment X (N*mm) [0.0]: ", 0.0);
    let my = prompt_f64("  Bending moment Y (N*mm) [0.0]: ", 0.0);
    let mz = prompt_f64("  Torsional moment Z (N*mm) [0.0]: ", 0.0);

    let input = DesignInput {
        pressure_mpa: Some(pressure),
        shell_diameter_mm: Some(shell_d),
        shell_thickness_mm: Some(shell_t),
        head_thickness_mm: Some(head_t),
        nozzle_diameter_mm: Some(nozzle_d),
        nozzle_thickness_mm: Some(nozzle_t),
        nozzle_od_mm: Some(nozzle_od),
        corrosion_allowance_mm: Some(ca),
        shell_allowable_mpa: Some(s_shell),
        head_allowable_mpa: Some(s_head),
        nozzle_allowable_mpa: Some(s_nozzle),
        shell_efficiency: Some(e_shell),
        head_efficiency: Some(e_head),
        nozzle_efficiency: Some(e_nozzle),
        equipment: Some(equipment),
        service: Some(service),
        head_type: Some(head_type),
        custom_min_enabled: Some(custom_min > 0.0),
        custom_min_mm: Some(custom_min),
        fx_n: Some(fx),
        fy_n: Some(fy),
        fz_n: Some(fz),
        mx_nmm: Some(mx),
        my_nmm: Some(my),
        mz_nmm: Some(mz),
    };

    let report = evaluate(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  COMPLIANCE REPORT");
    println!("═══════════════════════════════════════");

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &report.errors {
            eprintln!("  [{}] {}", error.error_code(), error);
        }
    }
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }

    if let Some(thickness) = &report.thickness {
        println!();
        println!("Component Thickness (required / actual, mm):");
        for (name, check) in [
            ("Shell", thickness.shell),
            ("Head", thickness.head),
            ("Nozzle", thickness.nozzle),
        ] {
            match check {
                Some(c) => println!(
                    "  {:8} {:7.2} / {:7.2} {}",
                    name,
                    c.required_mm,
                    c.actual_mm,
                    status_icon(c.passes())
                ),
                None => println!("  {:8} (not computed)", name),
            }
        }
    }

    if let Some(minimum) = &report.minimum {
        println!();
        println!("UG-16 Minimum Thickness ({}):", minimum.reference);
        for (name, check) in [
            ("Shell", minimum.shell),
            ("Head", minimum.head),
            ("Nozzle", minimum.nozzle),
        ] {
            println!(
                "  {:8} {:7.2} / {:7.2} {}",
                name,
                check.required_mm,
                check.actual_mm,
                status_icon(check.passes)
            );
        }
    }

    if let Some(reinforcement) = &report.reinforcement {
        println!();
        println!("UG-45 Nozzle Requirements ({}):", reinforcement.matched_size);
        println!(
            "  Required: {:.2} mm, Actual: {:.2} mm, Margin: {:.2} mm {}",
            reinforcement.required_mm,
            reinforcement.actual_mm,
            reinforcement.actual_mm - reinforcement.required_mm,
            status_icon(reinforcement.passes)
        );
    }

    if let Some(stresses) = &report.stresses {
        println!();
        println!("Membrane Stress (MPa):");
        println!("  Shell:  {:8.2} (allowable {:.1})", stresses.shell_mpa, s_shell);
        println!("  Head:   {:8.2} (allowable {:.1})", stresses.head_mpa, s_head);
        println!("  Nozzle: {:8.2} (allowable {:.1})", stresses.nozzle_mpa, s_nozzle);
    }

    if let Some(loads) = &report.loads {
        println!();
        println!("Nozzle Load Analysis (MPa):");
        println!("  Axial:      {:8.2}", loads.axial_mpa);
        println!("  Bending:    {:8.2}", loads.bending_mpa);
        println!("  Shear:      {:8.2}", loads.shear_mpa);
        println!(
            "  Equivalent: {:8.2} vs allowable {:.2} {}",
            loads.equivalent_mpa,
            loads.allowable_mpa,
            status_icon(loads.passes)
        );
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  OVERALL: {}", report.verdict);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{}", json);
    }

    if report.verdict == Verdict::Errored {
        std::process::exit(1);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
