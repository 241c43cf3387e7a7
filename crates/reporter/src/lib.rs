// reporter crate
//
// Every line written here is part of the console contract and is matched
// verbatim by scenario tests, so none of it is coloured.

use models::ValidationResult;
use std::fmt::Display;
use std::io::{self, Write};

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🚀 Starting API Tests...")
}

pub fn print_fetch_success<W: Write>(status: u16, out: &mut W) -> io::Result<()> {
    writeln!(out, "✅ API Request Successful: HTTP {}", status)
}

pub fn print_product_count<W: Write>(count: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "📦 Testing {} products...", count)
}

/// One line for a failure that ended the run before any results were produced
pub fn print_fetch_error<W: Write, E: Display>(error: &E, out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ {}", error)
}

pub fn print_results<W: Write>(result: &ValidationResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n🔍 Test Results:")?;

    if result.defects.is_empty() {
        writeln!(out, "✅ No defects found! All products passed validation.")?;
        return Ok(());
    }

    writeln!(out, "❌ Found {} defects:", result.defect_count())?;
    for defect in &result.defects {
        writeln!(out, "\nProduct ID: {}", defect.product_id)?;
        writeln!(out, "Defect Type: {}", defect.kind)?;
        writeln!(out, "Details: {}", defect.details)?;
    }

    Ok(())
}
