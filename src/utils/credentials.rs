use std::fmt;
use std::io::{self, BufRead, Write};
use anyhow::{bail, Context, Result};

#[derive(Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

// Never print the password, not even at debug level.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Anything that can hand out a login/password pair for one run.
pub trait CredentialSource {
    fn credentials(&self) -> Result<Credentials>;
}

// Reads `IS_LOGIN` and `IS_PASSWORD`, typically populated from `.env`.
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn credentials(&self) -> Result<Credentials> {
        credentials_from_lookup(|key| std::env::var(key).ok())
    }
}

// Empty values count as unset, so a copied `.env.example` still ends up at the prompt.
fn credentials_from_lookup<F>(lookup: F) -> Result<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let login = non_empty("IS_LOGIN").context("IS_LOGIN environment variable not found")?;
    let password = non_empty("IS_PASSWORD").context("IS_PASSWORD environment variable not found")?;
    Ok(Credentials { login, password })
}

// Asks on the terminal. The password is read without echo.
pub struct PromptCredentials;

impl CredentialSource for PromptCredentials {
    fn credentials(&self) -> Result<Credentials> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        prompt(&mut input, &mut output, || rpassword::prompt_password("Password: "))
    }
}

fn prompt<R, W, P>(input: &mut R, output: &mut W, read_password: P) -> Result<Credentials>
where
    R: BufRead,
    W: Write,
    P: FnOnce() -> io::Result<String>,
{
    let login = ask(input, output, "Login: ")?;
    if login.is_empty() {
        bail!("Login must not be empty");
    }
    let password = read_password().context("Failed to read password from terminal")?;
    Ok(Credentials { login, password })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from terminal")?;
    if read == 0 {
        bail!("Input closed before {}", question.trim_end_matches(": ").to_lowercase());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

// Environment when both values are set, otherwise the terminal asks for both.
pub fn resolve_credentials() -> Result<Credentials> {
    match EnvCredentials.credentials() {
        Ok(credentials) => Ok(credentials),
        Err(_) => PromptCredentials.credentials(),
    }
}
