//! `repl` subcommand: interactive session on stdin/stdout

use crate::config::Config;
use crate::dialog::{DialogEngine, Session};
use crate::llm::OllamaService;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let llm = Arc::new(OllamaService::new(&config.ollama_url, &config.model));
    let engine = DialogEngine::new(llm);
    let mut session = Session::new();

    println!("IM 工单机器人（输入 exit 退出）");
    println!("你可以输入“我想查订单”开始\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all("你：".as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed
            println!();
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("系统：已退出。");
            break;
        }

        let reply = engine.step(&mut session, input).await;
        println!("系统：{reply}");
    }

    Ok(())
}
