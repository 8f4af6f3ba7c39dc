use anyhow::{Context, Result};
use authentiscan_lib::services::config_store::load_config_file;
use authentiscan_lib::{init_logging, read_source, Analyzer, ConfigStore, EngineConfig};
use std::path::Path;

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    if let Some(path) = path {
        return load_config_file(Path::new(path))
            .with_context(|| format!("loading config from {}", path));
    }
    match ConfigStore::default_config_dir() {
        Some(dir) => ConfigStore::new(dir).load().context("loading stored config"),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  analyze_text <path.txt> [--config <json_path>] [--out <json_path>] [--sections]\n\nNotes:\n  - Input must be plain extracted text (max 2 MB).\n  - Without --config the stored config (if any) or built-in defaults are used."
        );
        return Ok(());
    }

    init_logging();

    let path = args[1].clone();
    let config = load_config(parse_arg_value(&args, "--config").as_deref())?;
    let out_path = parse_arg_value(&args, "--out");
    let show_sections = has_flag(&args, "--sections");

    let text = read_source(Path::new(&path)).with_context(|| format!("reading {}", path))?;
    let analyzer = Analyzer::new(config)?;
    let report = analyzer.analyze(&text)?;

    println!("File: {}", path);
    println!("Verdict: {}", report.tier.label());
    println!("Forgery score: {:.2} / 100", report.meter_position());
    println!(
        "Language: {} ({}, {:.0}%)",
        report.language.detected_language.as_str(),
        report.language.script_type.as_str(),
        report.language.confidence_percent
    );
    println!("Words: {} total, {} unique", report.word_count, report.unique_word_count);
    if report.truncated {
        println!("Note: input truncated to {} tokens", analyzer.config().max_tokens);
    }
    println!();

    for c in &report.components {
        println!("  {:<20} {:>6.2} / {:.0}", c.name.label(), c.value, c.cap);
    }

    if show_sections {
        println!();
        for s in &report.sections {
            let mark = if s.is_match { "!" } else { " " };
            println!("[{}] {} ({:.1})", mark, s.description, s.confidence);
            for d in &s.sub_details {
                println!("      {}", d);
            }
        }
    }

    if let Some(out_path) = out_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&out_path, json).with_context(|| format!("writing {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
