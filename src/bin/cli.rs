#[macro_use]
extern crate quicli;
extern crate taskboard;
extern crate uuid;

use quicli::prelude::*;
use taskboard::authn::jwt::AccessToken;

#[derive(Debug, StructOpt)]
struct Cli {
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    #[structopt(name = "decode", about = "Decode token")]
    Decode {
        #[structopt(long = "jwt")]
        jwt: String,
    },
    #[structopt(name = "encode", about = "Generate new token")]
    Encode {
        /// Lifetime in seconds; defaults to the configured token lifetime.
        #[structopt(long = "exp")]
        exp: Option<u32>,
        #[structopt(long = "sub")]
        sub: uuid::Uuid,
    },
}

main!(|args: Cli| {
    if let Err(e) = taskboard::settings::init() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match args.cmd {
        Command::Decode { jwt } => match AccessToken::decode(&jwt) {
            Ok(token) => println!("{:?}", token),
            Err(e) => eprintln!("{}", e),
        },
        Command::Encode { exp, sub } => {
            let exp = exp.unwrap_or_else(|| u32::from(AccessToken::default_expires_in()));
            let token = AccessToken::new(exp, sub);
            match AccessToken::encode(token) {
                Ok(jwt) => println!("{}", jwt),
                Err(e) => eprintln!("{:?}", e),
            }
        }
    }
});
