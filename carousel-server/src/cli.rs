use std::net::SocketAddr;
use std::process;

use chrono_tz::Tz;
use getopts::Options;

pub struct Args {
    pub address: SocketAddr,
    pub zone: Tz,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:3100]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "z",
        "zone",
        "IANA timezone the carousel window starts in [Default: America/Chicago]",
        "TIMEZONE",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let address = match matches.opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 3100)))
    {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Provided value for option 'address' is invalid: {err}");
            process::exit(1);
        }
    };

    let zone = match matches.opt_get_default("zone", chrono_tz::America::Chicago) {
        Ok(zone) => zone,
        Err(err) => {
            eprintln!("Provided value for option 'zone' is invalid: {err}");
            process::exit(1);
        }
    };

    Args { address, zone }
}
