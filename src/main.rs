use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use filekit::cli::{Cli, Command};
use filekit::{demo, fs_op, settings, snapshot};

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let settings = settings::load_settings();

    match cli.command {
        Command::Create { path } => {
            fs_op::create::create_file(&path)
                .with_context(|| format!("creating file {}", path.display()))?;
            println!("File '{}' created successfully.", path.display());
        }
        Command::Cat { path } => {
            fs_op::read::print_file(&path, &mut io::stdout().lock())
                .with_context(|| format!("reading file {}", path.display()))?;
        }
        Command::Append { path, text } => {
            fs_op::append::append_text(&path, &text)
                .with_context(|| format!("writing to file {}", path.display()))?;
        }
        Command::Rm { path } => {
            fs_op::remove::remove_file(&path)
                .with_context(|| format!("deleting file {}", path.display()))?;
            println!("File '{}' deleted successfully.", path.display());
        }
        Command::Rmdir { path } => {
            fs_op::remove::remove_dir(&path)
                .with_context(|| format!("removing directory {}", path.display()))?;
        }
        Command::Chmod { mode, path } => {
            let mode = fs_op::permissions::parse_mode(&mode)?;
            fs_op::permissions::change_permissions(&path, mode)
                .with_context(|| format!("setting permissions on {}", path.display()))?;
            println!("Permissions for '{}' set successfully.", path.display());
        }
        Command::Ls { dir } => {
            let names = fs_op::list::list_directory(&dir)
                .with_context(|| format!("opening directory {}", dir.display()))?;
            for name in names {
                println!("{name}");
            }
        }
        Command::Stat { path } => {
            let attrs = fs_op::stat::FileAttributes::read(&path)
                .with_context(|| format!("getting attributes of {}", path.display()))?;
            let name = path.display().to_string();
            print!("{}", attrs.render(&name, &settings.timestamp_format));
        }
        Command::Rename { path, new_name } => {
            let dest = fs_op::mv::rename_path(&path, &new_name)
                .with_context(|| format!("renaming {}", path.display()))?;
            println!(
                "File renamed successfully from '{}' to '{}'.",
                path.display(),
                dest.display()
            );
        }
        Command::Mv { src, dst } => {
            let dest = fs_op::mv::move_path(&src, &dst)
                .with_context(|| format!("moving {}", src.display()))?;
            println!(
                "File '{}' moved to '{}' successfully.",
                src.display(),
                dest.display()
            );
        }
        Command::Cp { src, dst } => {
            fs_op::copy::copy_file(&src, &dst)
                .with_context(|| format!("copying {}", src.display()))?;
            println!(
                "File copied successfully from '{}' to '{}'.",
                src.display(),
                dst.display()
            );
        }
        Command::Sort { dir, by } => {
            let records = snapshot::sorted_snapshot(&dir, by.into())
                .with_context(|| format!("sorting files in {}", dir.display()))?;
            print!(
                "{}",
                snapshot::render_listing(&records, &settings.timestamp_format)
            );
        }
        Command::Demo { dir } => demo::run(&dir, &settings.timestamp_format),
    }
    Ok(())
}
