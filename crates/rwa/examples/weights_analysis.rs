//! Relative Weights Analysis Examples
//!
//! This example demonstrates the `rwa` builder on small datasets:
//! - Explicit outcome and predictors
//! - Role inference (outcome from predictors and vice versa)
//! - Correlated predictors, where simple correlations mislead
//! - Error handling for degenerate inputs

use rwa::prelude::*;

fn main() -> Result<(), RwaError> {
    println!("{}", "=".repeat(80));
    println!("Relative Weights Analysis Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_explicit_roles()?;
    example_2_role_inference()?;
    example_3_correlated_predictors()?;
    example_4_error_handling()?;

    Ok(())
}

/// Example 1: Explicit Roles
/// Declares both the outcome and the predictor order.
fn example_1_explicit_roles() -> Result<(), RwaError> {
    println!("Example 1: Explicit Roles");
    println!("{}", "-".repeat(80));

    let table = sales_table()?;

    let result = RelativeWeights::new()
        .outcome("revenue")
        .predictors(["advertising", "price", "reach"])
        .build()?
        .compute(&table)?;

    println!("{}", result);
    println!();
    Ok(())
}

/// Example 2: Role Inference
/// Gives only the outcome; predictors are inferred as all other columns.
fn example_2_role_inference() -> Result<(), RwaError> {
    println!("Example 2: Role Inference");
    println!("{}", "-".repeat(80));

    let table = sales_table()?;

    let result = RelativeWeights::new()
        .outcome("revenue")
        .build()?
        .compute(&table)?;

    println!("Inferred predictors: {:?}", result.predictors);
    let rescaled_sum: f64 = result.rescaled_weights.iter().sum();
    println!("Rescaled weights sum: {:.4}", rescaled_sum);
    println!();
    Ok(())
}

/// Example 3: Correlated Predictors
/// Two predictors carry overlapping information; the weights split the
/// shared variance instead of double-counting it.
fn example_3_correlated_predictors() -> Result<(), RwaError> {
    println!("Example 3: Correlated Predictors");
    println!("{}", "-".repeat(80));

    let n = 40;
    let x1: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
    // x2 tracks x1 closely but not perfectly.
    let x2: Vec<f64> = x1
        .iter()
        .enumerate()
        .map(|(i, &v)| v + 0.3 * (i as f64 * 1.93).cos())
        .collect();
    let x3: Vec<f64> = (0..n).map(|i| (i as f64 * 0.71).cos()).collect();
    let y: Vec<f64> = (0..n)
        .map(|i| 1.5 * x1[i] + 1.2 * x2[i] + 0.4 * x3[i] + 0.1 * (i as f64 * 2.13).sin())
        .collect();

    let table = ObservationTable::from_columns([
        ("y", y),
        ("x1", x1),
        ("x2", x2),
        ("x3", x3),
    ])?;

    let result = RelativeWeights::new().outcome("y").build()?.compute(&table)?;

    for (name, raw, rescaled) in result.iter() {
        println!("  {name}: raw {raw:.4}, rescaled {rescaled:.2}%");
    }
    println!("  R^2: {:.4}", result.r_squared);
    println!();
    Ok(())
}

/// Example 4: Error Handling
/// Degenerate inputs fail with typed, descriptive errors.
fn example_4_error_handling() -> Result<(), RwaError> {
    println!("Example 4: Error Handling");
    println!("{}", "-".repeat(80));

    // Perfectly collinear predictors.
    let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let x2: Vec<f64> = x1.iter().map(|v| 2.0 * v).collect();
    let y = vec![1.0, 3.0, 2.0, 5.0, 4.0];
    let table = ObservationTable::from_columns([("y", y), ("x1", x1), ("x2", x2)])?;

    match RelativeWeights::new().outcome("y").build()?.compute(&table) {
        Ok(_) => println!("  unexpectedly succeeded"),
        Err(e) => println!("  collinear predictors: {e}"),
    }

    // Roles that cannot be resolved.
    match RelativeWeights::new().build() {
        Ok(_) => println!("  unexpectedly succeeded"),
        Err(e) => println!("  no roles declared: {e}"),
    }

    println!();
    Ok(())
}

/// Small synthetic marketing dataset shared by the examples.
fn sales_table() -> Result<ObservationTable<f64>, RwaError> {
    let n = 30;
    let advertising: Vec<f64> = (0..n).map(|i| 10.0 + (i as f64 * 0.83).sin() * 4.0).collect();
    let price: Vec<f64> = (0..n).map(|i| 5.0 + (i as f64 * 1.31).cos() * 1.5).collect();
    let reach: Vec<f64> = (0..n)
        .map(|i| 0.6 * advertising[i] + (i as f64 * 2.17).sin() * 2.0)
        .collect();
    let revenue: Vec<f64> = (0..n)
        .map(|i| {
            3.0 * advertising[i] - 2.0 * price[i] + 1.0 * reach[i]
                + (i as f64 * 1.57).sin() * 1.5
        })
        .collect();

    ObservationTable::from_columns([
        ("revenue", revenue),
        ("advertising", advertising),
        ("price", price),
        ("reach", reach),
    ])
}
