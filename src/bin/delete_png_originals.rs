use clap::Parser;
use std::process;
use webp_uploads::prune;
use webp_uploads::uploads::UploadsDir;

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Deletes .png uploads that already have a .webp counterpart"
)]
struct Arguments {}

fn main() {
    // No flags; clap still rejects stray arguments and serves --help
    Arguments::parse();

    let uploads = UploadsDir::locate().unwrap_or_else(|err| {
        eprintln!("Problem locating the uploads directory: {err}");
        process::exit(1)
    });

    let uploads = uploads.validate().unwrap_or_else(|err| {
        eprintln!("Error: uploads directory not found: {err}");
        process::exit(1)
    });

    if let Err(e) = prune::run(uploads.path()) {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}
