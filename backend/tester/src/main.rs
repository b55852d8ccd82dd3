use anyhow::{Context, bail};
use clap::Parser;
use reqwest::{Client, Response};
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calls every route of a running Skill Barter backend")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[arg(long, default_value = "Skill Barter Tester")]
    name: String,

    #[arg(long, default_value = "tester@example.com")]
    email: String,

    #[arg(long, default_value = "Smoke test feedback")]
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let base = args.base_url.trim_end_matches('/');
    let client = Client::new();

    let posts = [
        (
            "/test",
            json!({ "name": args.name, "test_type": "Connection Check" }),
        ),
        ("/recommend", json!({ "skills": ["python", "guitar"] })),
        ("/chat", json!({ "message": "How do I barter a skill?" })),
        (
            "/contact",
            json!({ "name": args.name, "email": args.email, "message": args.message }),
        ),
    ];

    let mut failures = 0;

    failures += report("GET /", client.get(format!("{base}/")).send().await).await?;

    for (path, body) in posts {
        let response = client.post(format!("{base}{path}")).json(&body).send().await;
        failures += report(&format!("POST {path}"), response).await?;
    }

    failures += report(
        "GET /feedback",
        client.get(format!("{base}/feedback")).send().await,
    )
    .await?;

    if failures > 0 {
        bail!("{failures} request(s) failed");
    }

    println!("\nAll routes responded.");
    Ok(())
}

async fn report(label: &str, response: reqwest::Result<Response>) -> anyhow::Result<usize> {
    let response = response.with_context(|| format!("{label}: request failed"))?;
    let status = response.status();
    let text = response.text().await?;

    let body = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    println!("{label} -> {status}\n{body}\n");

    Ok(usize::from(status.is_server_error()))
}
