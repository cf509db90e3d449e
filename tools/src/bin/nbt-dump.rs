use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{App, Arg};
use env_logger::Env;
use flate2::Compression;
use log::{error, info};
use nbtkit::compress::{self, Format};
use nbtkit::{Endian, ReadOpts, WriteOpts};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn run() -> Result<()> {
    let matches = App::new("nbt-dump")
        .about("Print an NBT file, GZIP and zlib compression is detected automatically")
        .arg(
            Arg::with_name("file")
                .takes_value(true)
                .required(false)
                .help("file to read, stdin if omitted"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false)
                .help("print the tree as JSON instead of Rust debug output"),
        )
        .arg(
            Arg::with_name("little-endian")
                .long("little-endian")
                .takes_value(false)
                .required(false)
                .help("read little endian NBT, as used by Bedrock edition"),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .takes_value(true)
                .required(false)
                .help("also write the document GZIP compressed to this path, in the byte order it was read in"),
        )
        .get_matches();

    let endian = match matches.is_present("little-endian") {
        true => Endian::Little,
        false => Endian::Big,
    };
    let opts = ReadOpts::new().endian(endian);

    let stdin = io::stdin();
    let input: Box<dyn BufRead> = match matches.value_of_os("file") {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(stdin.lock()),
    };

    let (key, value) = compress::from_reader_auto(input, opts)?;
    info!("read document {:?} of type {}", key, value.tag());

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{:?}: {:#?}", key, value);
    }

    if let Some(out) = matches.value_of_os("out") {
        let file = File::create(out)?;
        let opts = WriteOpts::new().endian(endian);
        compress::to_writer_compressed(
            file,
            Format::Gzip,
            Compression::default(),
            &key,
            &value,
            opts,
        )?;
        info!("wrote {:?}", out);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
