use clap::Parser;
use std::process;
use webp_uploads::convert;
use webp_uploads::uploads::UploadsDir;

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Converts every .png in the uploads directory to WebP format"
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

    if let Err(e) = convert::run(uploads.path()) {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}
