//! Reference usage sequence exercising every operation in order.
//!
//! The steps are independent: a failing step is reported with its cause and
//! the sequence continues, since no step depends on another having
//! succeeded to leave the process in a consistent state.

use std::fmt::Display;
use std::io;
use std::path::Path;

use crate::fs_op;
use crate::snapshot::{self, SortOrder};

fn report_failure(action: &str, err: &dyn Display) {
    eprintln!("Error {action}: {err}");
}

fn print_sorted(dir: &Path, order: SortOrder, timestamp_format: &str) {
    match snapshot::sorted_snapshot(dir, order) {
        Ok(records) => print!("{}", snapshot::render_listing(&records, timestamp_format)),
        Err(err) => report_failure("opening directory", &err),
    }
}

/// Run the whole demonstration inside `base`.
pub fn run(base: &Path, timestamp_format: &str) {
    let file1 = base.join("file1.txt");
    let file2 = base.join("file2.txt");

    for (name, path) in [("file1.txt", &file1), ("file2.txt", &file2)] {
        match fs_op::create::create_file(path) {
            Ok(()) => println!("File '{name}' created successfully."),
            Err(err) => report_failure("creating file", &err),
        }
    }

    if let Err(err) = fs_op::append::append_text(&file1, "Hello, World!\n") {
        report_failure("writing to file", &err);
    }
    if let Err(err) = fs_op::append::append_text(&file2, "Another file content.\n") {
        report_failure("writing to file", &err);
    }

    println!("Contents of file1.txt:");
    if let Err(err) = fs_op::read::print_file(&file1, &mut io::stdout().lock()) {
        report_failure("reading file", &err);
    }
    println!("\nContents of file2.txt:");
    if let Err(err) = fs_op::read::print_file(&file2, &mut io::stdout().lock()) {
        report_failure("reading file", &err);
    }

    match fs_op::permissions::change_permissions(&file1, 0o644) {
        Ok(()) => println!("Permissions for 'file1.txt' set successfully."),
        Err(err) => report_failure("setting file permissions", &err),
    }

    println!("\nListing files in the demo directory:");
    match fs_op::list::list_directory(base) {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
        }
        Err(err) => report_failure("opening directory", &err),
    }

    println!("\nFile attributes for file1.txt:");
    match fs_op::stat::FileAttributes::read(&file1) {
        Ok(attrs) => print!("{}", attrs.render("file1.txt", timestamp_format)),
        Err(err) => report_failure("getting file attributes", &err),
    }

    match fs_op::mv::rename_path(&file2, "renamed_file2.txt") {
        Ok(_) => println!("File renamed successfully from 'file2.txt' to 'renamed_file2.txt'."),
        Err(err) => report_failure("renaming file", &err),
    }

    let copy_target = base.join("file1_copy.txt");
    match fs_op::copy::copy_file(&file1, &copy_target) {
        Ok(_) => println!("File copied successfully from 'file1.txt' to 'file1_copy.txt'."),
        Err(err) => report_failure("copying file", &err),
    }

    let moved_dir = base.join("moved");
    match fs_op::create::create_dir(&moved_dir) {
        Ok(()) => match fs_op::mv::move_path(&file1, &moved_dir) {
            Ok(_) => println!("File 'file1.txt' moved to 'moved' successfully."),
            Err(err) => report_failure("moving file", &err),
        },
        Err(err) => report_failure("creating directory", &err),
    }

    println!("\nSorting files by size:");
    print_sorted(base, SortOrder::SizeAscending, timestamp_format);

    println!("\nSorting files by last modification time:");
    print_sorted(base, SortOrder::ModifiedDescending, timestamp_format);

    // clean up everything the demo created
    for (name, path) in [
        ("renamed_file2.txt", base.join("renamed_file2.txt")),
        ("file1_copy.txt", copy_target),
        ("moved/file1.txt", moved_dir.join("file1.txt")),
    ] {
        match fs_op::remove::remove_file(&path) {
            Ok(()) => println!("File '{name}' deleted successfully."),
            Err(err) => report_failure("deleting file", &err),
        }
    }
    if let Err(err) = fs_op::remove::remove_dir(&moved_dir) {
        report_failure("removing directory", &err);
    }
}
