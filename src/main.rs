//! Interactive console shell: three "tabs" (compose, sent log, settings)
//! driven from stdin. All mail logic lives in the library; this file only
//! reads fields, builds drafts, and prints results.

use std::io::{self, BufRead, Write};

use missive::{Session, SmtpSettings};

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read the message body: lines until a lone `.`.
fn read_body() -> io::Result<Option<String>> {
    println!("Message (end with a single '.' on its own line):");
    let mut body = String::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line == "." {
            return Ok(Some(body.trim_end_matches('\n').to_string()));
        }
        body.push_str(&line);
        body.push('\n');
    }
    Ok(None)
}

async fn compose(session: &mut Session) -> io::Result<()> {
    let Some(from_name) = prompt("From name")? else { return Ok(()) };
    let Some(recipient) = prompt("To")? else { return Ok(()) };
    let Some(subject) = prompt("Subject")? else { return Ok(()) };
    let Some(body) = read_body()? else { return Ok(()) };

    let current = session
        .attachment()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".into());
    let Some(attach) = prompt(&format!("Attach file [{current}] (- to remove)"))? else {
        return Ok(());
    };
    match attach.as_str() {
        "" => {}
        "-" => session.clear_attachment(),
        path => session.attach(path),
    }

    let draft = session.compose(from_name, recipient, subject, body);
    match session.send(&draft).await {
        Ok(()) => println!("Email sent successfully!"),
        Err(e) if e.is_validation() => eprintln!("Validation error: {e}"),
        Err(e) => eprintln!("Failed to send email: {e}"),
    }
    Ok(())
}

fn show_log(session: &mut Session) -> io::Result<()> {
    if session.sent().is_empty() {
        println!("No sent emails.");
        return Ok(());
    }
    for (i, entry) in session.sent().iter().enumerate() {
        println!("{}. {entry}", i + 1);
    }
    if let Some(answer) = prompt("Clear logs? [y/N]")? {
        if answer.eq_ignore_ascii_case("y") {
            session.clear_sent();
            println!("Sent log cleared.");
        }
    }
    Ok(())
}

fn edit_settings(session: &mut Session) -> io::Result<()> {
    let current = session.settings().clone();
    let masked = "*".repeat(current.password.chars().count());

    let field = |label: &str, current: &str| -> io::Result<Option<String>> {
        match prompt(&format!("{label} [{current}]"))? {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(Some(current.to_string())),
            Some(s) => Ok(Some(s)),
        }
    };

    let Some(host) = field("SMTP host", &current.host)? else { return Ok(()) };
    let Some(port) = field("SMTP port", &current.port)? else { return Ok(()) };
    let Some(user) = field("Email address", &current.user)? else { return Ok(()) };
    let Some(password) = prompt(&format!("Password [{masked}]"))? else { return Ok(()) };
    let password = if password.is_empty() {
        current.password
    } else {
        password
    };

    let settings = SmtpSettings {
        host,
        port,
        user,
        password,
    };
    match session.save_settings(settings) {
        Ok(()) => println!("SMTP settings saved successfully!"),
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    env_logger::init();

    let mut session = Session::new();
    println!("missive — compose, send, remember");

    loop {
        println!();
        let Some(choice) = prompt("[c]ompose  [l]og  [s]ettings  [q]uit")? else {
            break;
        };
        match choice.as_str() {
            "c" => compose(&mut session).await?,
            "l" => show_log(&mut session)?,
            "s" => edit_settings(&mut session)?,
            "q" => break,
            "" => {}
            other => println!("Unknown choice: {other}"),
        }
    }
    Ok(())
}
