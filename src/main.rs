use std::fmt::Display;

use clap::Parser;
use gridmat::{Matrix, Result};
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "gridmat", version)]
/// Prints properties of a matrix and the results of arithmetic with it.
///
/// Matrices are written as rows separated by `;`, with elements separated by spaces or commas,
/// for example "1 2; 3 4".
struct Args {
    #[arg(allow_hyphen_values = true)]
    /// The matrix to inspect.
    matrix: Matrix,

    #[arg(long, allow_hyphen_values = true)]
    /// A second matrix to add to, subtract from and multiply with MATRIX.
    rhs: Option<Matrix>,

    #[arg(long, allow_negative_numbers = true)]
    /// A scalar to multiply MATRIX with.
    scale: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    gridmat::init_logger!();

    let args = Args::parse();
    let mat = &args.matrix;
    debug!("parsed {}x{} matrix", mat.height(), mat.width());

    section("matrix", mat);
    println!("shape: {}x{}\n", mat.height(), mat.width());
    section("transpose", mat.transpose());

    if mat.is_square() {
        report("trace", mat.trace());
        report("determinant", mat.determinant());
        section_or_error("inverse", mat.inverse());
    }

    if let Some(rhs) = &args.rhs {
        debug!("parsed {}x{} right-hand side", rhs.height(), rhs.width());
        section_or_error("matrix + rhs", mat + rhs);
        section_or_error("matrix - rhs", mat - rhs);
        section_or_error("matrix * rhs", mat * rhs);
    }

    if let Some(k) = args.scale {
        section(&format!("{k} * matrix"), k * mat);
    }

    Ok(())
}

fn section(title: &str, mat: impl Display) {
    println!("{title}:\n{mat}");
}

fn section_or_error(title: &str, res: Result<Matrix>) {
    match res {
        Ok(mat) => section(title, mat),
        Err(e) => println!("{title}: {e}\n"),
    }
}

fn report(title: &str, res: Result<f64>) {
    match res {
        Ok(value) => println!("{title}: {value}"),
        Err(e) => println!("{title}: {e}"),
    }
}
