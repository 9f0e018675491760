use crate::core::{Conversion, ConvertOptions, Converter, ShortSheetPolicy};
use crate::error::TimetableResult;
use crate::excel::{TimetableWorkbook, WorkbookSource};
use crate::parser::SheetLayout;
use crate::types::SheetWarning;
use crate::writer::JsonWriter;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{error, info};

/// Arguments of the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub code_key: String,
    pub layout: Option<PathBuf>,
    pub skip_short_sheets: bool,
    pub dry_run: bool,
}

/// Execute the convert command
pub fn convert(args: ConvertArgs) -> TimetableResult<()> {
    info!("Starting timetable parsing and JSON generation...");

    let layout = match &args.layout {
        Some(path) => SheetLayout::from_file(path)?,
        None => SheetLayout::default(),
    };
    let short_sheets = if args.skip_short_sheets {
        ShortSheetPolicy::Skip
    } else {
        ShortSheetPolicy::Abort
    };
    let converter = Converter::new(ConvertOptions {
        layout,
        short_sheets,
    });
    let writer = JsonWriter::with_code_key(args.code_key.as_str());

    let result = if args.dry_run {
        converter.load_and_convert(&args.input).and_then(|conversion| {
            println!("{}", writer.to_string(&conversion.courses)?);
            Ok(conversion)
        })
    } else {
        converter.run(&args.input, &writer, &args.output)
    };

    let conversion = match result {
        Ok(conversion) => conversion,
        Err(e) => {
            error!("Failed to parse workbook.");
            return Err(e);
        }
    };

    info!("Task completed successfully.");
    print_summary(&args, &conversion);
    Ok(())
}

fn print_summary(args: &ConvertArgs, conversion: &Conversion) {
    eprintln!("{}", "📅 Timetable conversion".bold().green());
    eprintln!("   Input:    {}", args.input.display());
    if args.dry_run {
        eprintln!("   Output:   {}", "(dry run, stdout)".yellow());
    } else {
        eprintln!("   Output:   {}", args.output.display());
    }
    eprintln!(
        "   Courses:  {}, sections: {}",
        conversion.courses.len(),
        conversion.section_count()
    );

    if !conversion.warnings.is_empty() {
        eprintln!("\n{}", "⚠️  Warnings:".yellow().bold());
        for warning in &conversion.warnings {
            eprintln!("   {}", warning);
        }
    }
}

/// Execute the inspect command - list worksheets and their columns
pub fn inspect(input: PathBuf, layout: Option<PathBuf>) -> TimetableResult<()> {
    let layout = match &layout {
        Some(path) => SheetLayout::from_file(path)?,
        None => SheetLayout::default(),
    };

    let mut workbook = TimetableWorkbook::open(&input).map_err(|e| {
        error!("{}", e);
        e
    })?;

    println!("{}", "🔍 Timetable workbook".bold().green());
    println!("   File: {}\n", workbook.path().display());

    for sheet_name in workbook.sheet_names() {
        let sheet = workbook.worksheet(&sheet_name)?;
        println!(
            "   📊 Sheet: {} ({} rows)",
            sheet_name.bright_blue().bold(),
            sheet.row_count()
        );
        println!("      Columns: {}", sheet.columns().join(", "));

        for spec in layout.columns.expected() {
            if !sheet.has_column(&spec.header) {
                let warning = SheetWarning::MissingColumn {
                    sheet: sheet_name.clone(),
                    column: spec.header.clone(),
                };
                println!("      {}", warning.to_string().yellow());
            }
        }
    }

    Ok(())
}
