use anyhow::Result;
use rompatch_core::operations::file_operations::{read_diff_file, read_rom, write_rom};
use rompatch_core::{apply_diff, parse_diff, run_preflight_checks};
use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut rom_path: Option<String> = None;
    let mut diff_path: Option<String> = None;
    let mut output: Option<String> = None;
    let mut dry_run = false;
    let mut help = false;

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "--help" | "-h" => help = true,
            "-o" | "--output" => output = iter.next().cloned(),
            _ if rom_path.is_none() => rom_path = Some(arg.clone()),
            _ => diff_path = Some(arg.clone()),
        }
    }

    if help {
        println!("Usage: rompatch ROM [DIFF_FILE] [-o OUTPUT] [--dry-run]");
        println!("Apply a byte-level diff list (JSON) to a ROM image.");
        println!();
        println!("Reads the diff from DIFF_FILE, or from stdin when omitted.");
        println!("The input ROM is never modified; the patched copy is written");
        println!("to OUTPUT (default: ROM.patched).");
        return Ok(());
    }

    let rom_path = match rom_path {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: No ROM file specified. See --help.");
            process::exit(1);
        }
    };

    let diff_content = if let Some(path) = diff_path {
        read_diff_file(Path::new(&path)).unwrap_or_else(|_| {
            eprintln!("Error: Diff file not found at '{}'", path);
            process::exit(1);
        })
    } else {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("Error: No diff file specified and no data piped from stdin.");
            process::exit(1);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    if diff_content.trim().is_empty() {
        eprintln!("Error: Empty diff content.");
        process::exit(1);
    }

    let edits = match parse_diff(&diff_content) {
        Ok(edits) => edits,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if edits.is_empty() {
        println!("No edits found in the diff list. Nothing to do.");
        process::exit(0);
    }

    let rom = read_rom(&rom_path)?;
    println!("--- Patching ROM: {:?} ({} bytes)", rom_path, rom.len());

    match run_preflight_checks(rom.len(), &edits) {
        Ok(_) => println!("\n--- Preflight Checks Passed. Proceeding with patching. ---"),
        Err(errors) => {
            println!("\n--- Preflight Checks Failed ---");
            for err in errors {
                println!("{}", err);
            }
            println!("\nAborting. No files were written.");
            process::exit(1);
        }
    }

    if dry_run {
        println!("[DRY RUN] {} edit(s) would be applied. No files were written.", edits.len());
        return Ok(());
    }

    let patched = match apply_diff(&rom, &edits) {
        Ok(patched) => patched,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let output_path = output.map(PathBuf::from).unwrap_or_else(|| {
        let mut name = rom_path.as_os_str().to_os_string();
        name.push(".patched");
        PathBuf::from(name)
    });

    write_rom(&output_path, &patched)?;

    let total_bytes: usize = edits.iter().map(|e| e.bytes.len()).sum();
    println!("\n--- Summary ---");
    println!("Edits applied: {}", edits.len());
    println!("Bytes written: {}", total_bytes);
    println!("Output:        {:?}", output_path);

    Ok(())
}
