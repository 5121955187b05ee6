//! # Retaining Wall CLI
//!
//! Terminal front end for the `wall_core` engine: prompts for the wall
//! geometry and soil parameters (with the standard example wall as
//! defaults), runs the full verification and prints the report plus the raw
//! JSON result.

use std::io::{self, BufRead, Write};

use wall_core::calculations::wall::{evaluate, WallInput};
use wall_core::geometry::{PassiveSoilConfig, WallGeometry};
use wall_core::materials::{ConcreteClass, DesignMaterials, SteelClass};
use wall_core::soil::{SoilProfile, Surcharge};
use wall_core::units::coerce_f64;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    coerce_f64(input.trim(), default)
}

fn prompt_str(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn main() {
    println!("Retaining Wall Calculator (L-profile)");
    println!("=====================================");
    println!();

    let height_cm = prompt_f64("Wall height H (cm) [300]: ", 300.0);
    let stem_cm = prompt_f64("Stem thickness t (cm) [24]: ", 24.0);
    let base_width_cm = prompt_f64("Base width B (cm) [150]: ", 150.0);
    let base_thick_cm = prompt_f64("Base thickness d (cm) [24]: ", 24.0);
    let toe_cm = prompt_f64("Toe width (cm) [50]: ", 50.0);

    let gamma = prompt_f64("Soil unit weight (kN/m3) [18]: ", 18.0);
    let phi = prompt_f64("Friction angle (deg) [30]: ", 30.0);
    let cohesion = prompt_f64("Cohesion (kPa) [0]: ", 0.0);
    let qa = prompt_f64("Admissible bearing pressure (kPa) [200]: ", 200.0);
    let surcharge = prompt_f64("Surcharge on backfill (kPa) [0]: ", 0.0);

    let passive_hp = prompt_f64("Passive soil height in front of toe (cm, 0 = none) [0]: ", 0.0);

    let concrete = ConcreteClass::from_str_flexible(&prompt_str("Concrete class [C25]: "))
        .unwrap_or(ConcreteClass::C25);
    let steel = SteelClass::from_str_flexible(&prompt_str("Steel class [CA50]: "))
        .unwrap_or(SteelClass::CA50);

    let input = WallInput {
        geometry: WallGeometry::from_toe(height_cm, stem_cm, base_width_cm, base_thick_cm, toe_cm),
        soil: SoilProfile {
            unit_weight_kn_m3: gamma,
            saturated_unit_weight_kn_m3: gamma + 2.0,
            friction_angle_deg: phi,
            cohesion_kpa: cohesion,
            admissible_bearing_kpa: qa,
            water_table: false,
        },
        passive: PassiveSoilConfig {
            enabled: passive_hp > 0.0,
            height_cm: passive_hp,
            visual_width_cm: passive_hp,
        },
        surcharge: Surcharge { q_kpa: surcharge },
        materials: DesignMaterials {
            concrete,
            steel,
            ..DesignMaterials::default()
        },
    };

    let result = evaluate(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  RETAINING WALL VERIFICATION");
    println!("═══════════════════════════════════════");
    println!();
    println!("Earth pressure:");
    println!("  Ka = {:.4}", result.active.ka);
    println!(
        "  Ea = {:.2} kN/m at y = {:.2} m",
        result.active.total_kn, result.active.line_of_action_m
    );
    if let Some(p) = &result.passive {
        println!("  Ep = {:.2} kN/m at y = {:.2} m", p.total_kn, p.line_of_action_m);
    }
    println!();
    println!("Stability:");
    for c in &result.stability.components {
        println!(
            "  {:<10} {:>7.2} kN/m  at {:.2} m  -> {:.2} kN·m/m",
            c.label,
            c.weight_kn,
            c.lever_arm_m,
            c.moment_knm()
        );
    }
    println!("  W  = {:.2} kN/m", result.stability.total_weight_kn);
    println!("  Mr = {:.2} kN·m/m", result.stability.resisting_moment_knm);
    println!("  Mt = {:.2} kN·m/m", result.stability.overturning_moment_knm);
    println!(
        "  Overturning FS = {} (min 2.00) {}",
        result.stability.overturning_fs,
        status_icon(result.stability.overturning_ok)
    );
    println!(
        "  Sliding FS     = {} (min 1.50) {}",
        result.stability.sliding_fs,
        status_icon(result.stability.sliding_ok)
    );
    println!();
    println!("Bearing:");
    println!(
        "  e = {:.4} m (limit B/6 = {:.4} m)",
        result.bearing.eccentricity_m, result.bearing.middle_third_limit_m
    );
    println!(
        "  q_max = {:.2} kPa, q_min = {:.2} kPa (qa = {:.0} kPa) {}",
        result.bearing.q_max_kpa,
        result.bearing.q_min_kpa,
        result.bearing.admissible_kpa,
        status_icon(result.bearing.bearing_ok)
    );
    println!();
    println!("Base-slab reinforcement:");
    println!("  Md = {:.1} kN·cm/m", result.reinforcement.design_moment_kncm);
    println!(
        "  As = {:.2} cm²/m (min {:.2}), adopted {:.2} cm²/m",
        result.reinforcement.required_area_cm2,
        result.reinforcement.minimum_area_cm2,
        result.reinforcement.adopted_area_cm2
    );
    for s in &result.reinforcement.suggestions {
        println!(
            "    φ{} mm every {:.0} cm -> {:.2} cm²/m (lb = {:.0} cm)",
            s.diameter_mm, s.spacing_cm, s.provided_area_cm2, s.anchorage_cm
        );
    }
    println!();
    if !result.warnings.is_empty() {
        println!("Warnings:");
        for w in &result.warnings {
            println!("  - {}", w);
        }
        println!();
    }
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if result.approved { "APPROVED" } else { "NOT APPROVED" }
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
