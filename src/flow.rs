//! The interactive handshake, from consumer credentials to a printed access token.

use std::io::{BufRead, Write};

use log::info;

use crate::client::Client;
use crate::console::{Console, Environment};
use crate::error::{Error, Result};
use crate::signer::Signer;
use crate::token::{preview, AccessToken, ConsumerCredentials, Verifier};

/// Consumer key variable.
pub const KEY_VAR: &str = "DISCOGS_KEY";
/// Consumer secret variable.
pub const SECRET_VAR: &str = "DISCOGS_SECRET";

const DEVELOPER_SETTINGS_URL: &str = "https://www.discogs.com/settings/developers";

fn rule() -> String {
    "=".repeat(70)
}

/// Takes the consumer credentials from `env`, prompting for whichever part is unset.
pub fn resolve_credentials<R: BufRead, W: Write>(
    env: &impl Environment,
    console: &mut Console<R, W>,
) -> Result<ConsumerCredentials> {
    let key = match env.var(KEY_VAR) {
        Some(key) => {
            console.say(format_args!(
                "\n[OK] Using consumer key from environment: {}...",
                preview(&key, 20)
            ))?;
            key
        }
        None => console.ask("\nEnter your Discogs Consumer Key: ")?,
    };
    let secret = match env.var(SECRET_VAR) {
        Some(secret) => {
            console.say(format_args!(
                "[OK] Using consumer secret from environment: {}...",
                preview(&secret, 10)
            ))?;
            secret
        }
        None => console.ask("Enter your Discogs Consumer Secret: ")?,
    };

    ConsumerCredentials::new(key, secret).ok_or(Error::MissingCredentials)
}

/// Shows the authorization URL and blocks until the user enters the verification code.
pub fn read_verifier<R: BufRead, W: Write>(
    authorize_url: &url::Url,
    console: &mut Console<R, W>,
) -> Result<Verifier> {
    console.say(format_args!("\n{}", rule()))?;
    console.say("AUTHORIZATION REQUIRED")?;
    console.say(rule())?;
    console.say(format_args!(
        "\nPlease visit this URL in your browser:\n\n{}\n",
        authorize_url
    ))?;
    console.say("After authorizing the application, you will see a confirmation page")?;
    console.say("with a verification code.")?;
    console.say(format_args!("{}\n", rule()))?;

    Verifier::new(&console.ask("Enter the verification code: ")?)
}

/// Runs the whole handshake and prints the resulting token pair.
///
/// Every step either advances or returns the error; nothing is retried.
pub fn run<S: Signer, R: BufRead, W: Write>(
    client: &Client<S>,
    env: &impl Environment,
    console: &mut Console<R, W>,
) -> Result<AccessToken> {
    console.say(format_args!("\n{}", rule()))?;
    console.say("DISCOGS OAUTH 1.0A TOKEN GENERATOR")?;
    console.say(rule())?;

    let consumer = resolve_credentials(env, console)?;

    console.say("\n[Step 1] Getting request token from Discogs...")?;
    let request_token = client.request_token(&consumer)?;
    info!("obtained request token");
    console.say(format_args!(
        "[OK] Request token obtained: {}...",
        preview(request_token.token(), 20)
    ))?;

    console.say("\n[Step 2] Authorizing application...")?;
    let authorize_url = client.authorize_url(&request_token)?;
    let verifier = read_verifier(&authorize_url, console)?;
    console.say(format_args!(
        "[OK] Verification code received: {}...",
        preview(verifier.as_str(), 10)
    ))?;

    console.say("\n[Step 3] Getting access token...")?;
    let access_token = client.access_token(&consumer, &request_token, &verifier)?;
    info!("obtained access token");
    console.say(format_args!(
        "[OK] Access token obtained: {}...",
        preview(access_token.token(), 20)
    ))?;

    console.say(format_args!("\n{}", rule()))?;
    console.say("SUCCESS! OAuth tokens obtained")?;
    console.say(rule())?;
    console.say("\nAdd these to your .env file:\n")?;
    console.say(access_token.env_lines())?;
    console.say("\nThese tokens do not expire unless you revoke access.")?;
    console.say("Keep them secure and never commit them to version control!")?;
    console.say(format_args!("{}\n", rule()))?;

    Ok(access_token)
}

/// Prints the outcome of [`run`] and returns the process exit status.
pub fn report<T, R: BufRead, W: Write>(result: Result<T>, console: &mut Console<R, W>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            // the console itself may be what failed
            let _ = console.say(format_args!("\n[ERROR] {}", err));
            if let Error::MissingCredentials = err {
                let _ = console.say(format_args!(
                    "\nYou can get these from: {}",
                    DEVELOPER_SETTINGS_URL
                ));
            }
            1
        }
    }
}
