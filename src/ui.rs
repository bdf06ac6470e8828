//! Terminal question form.
//!
//! Each entered line is one submit. Empty submits only produce a warning;
//! everything else goes through [`Ask`] exactly once.

use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::client::Ask;

pub const TITLE: &str = "AI-Powered Knowledge Assistant";
pub const SUBTITLE: &str = "Ask any question and get AI-generated answers.";
pub const PROMPT: &str = "Enter your question:";

/// What the form shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning,
    Answer(String),
    Error,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Please enter a question."),
            Self::Answer(answer) => write!(f, "Answer: {answer}"),
            Self::Error => write!(f, "Error fetching response from backend."),
        }
    }
}

pub async fn submit<A: Ask + ?Sized>(asker: &A, question: &str) -> Notice {
    if question.is_empty() {
        return Notice::Warning;
    }

    match asker.ask(question).await {
        Ok(answer) => Notice::Answer(answer),
        Err(err) => {
            debug!(error = %err, "question failed");
            Notice::Error
        }
    }
}

/// Runs the form until `input` is exhausted.
pub async fn run<A, R, W>(asker: &A, mut input: R, mut output: W) -> std::io::Result<()>
where
    A: Ask + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{TITLE}\n\n{SUBTITLE}\n\n").as_bytes())
        .await?;

    let mut buf = Vec::new();
    loop {
        output.write_all(format!("{PROMPT} ").as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            output.write_all(b"\n").await?;
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the form.
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.strip_suffix('\n').unwrap_or(&raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let notice = submit(asker, line).await;
        output.write_all(format!("{notice}\n\n").as_bytes()).await?;
    }

    output.flush().await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::*;
    use crate::client::ClientError;

    struct Scripted {
        reply: Result<&'static str, StatusCode>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn answering(answer: &'static str) -> Self {
            Self {
                reply: Ok(answer),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: StatusCode) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Ask for Scripted {
        async fn ask(&self, _question: &str) -> Result<String, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .map(str::to_string)
                .map_err(ClientError::Status)
        }
    }

    #[tokio::test]
    async fn empty_submit_warns_without_asking() {
        let asker = Scripted::answering("unused");
        assert_eq!(submit(&asker, "").await, Notice::Warning);
        assert_eq!(asker.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn answer_is_rendered_verbatim() {
        let asker = Scripted::answering("2 + 2 = 4");
        let notice = submit(&asker, "What is 2+2?").await;
        assert_eq!(notice.to_string(), "Answer: 2 + 2 = 4");
        assert_eq!(asker.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn any_failure_is_a_generic_error() {
        let asker = Scripted::failing(StatusCode::BAD_REQUEST);
        let notice = submit(&asker, "hello").await;
        assert_eq!(notice.to_string(), "Error fetching response from backend.");
    }

    #[tokio::test]
    async fn run_handles_each_line_as_a_submit() {
        let asker = Scripted::answering("4");
        let mut output = Vec::new();

        run(&asker, &b"\nWhat is 2+2?\n"[..], &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Please enter a question."));
        assert!(text.contains("Answer: 4"));
        assert_eq!(asker.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_still_a_submit() {
        let asker = Scripted::answering("4");
        let mut output = Vec::new();

        run(&asker, &b"\xff\xfe\r\nWhat is 2+2?"[..], &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Answer: 4").count(), 2);
        assert_eq!(asker.calls.load(Ordering::SeqCst), 2);
    }
}
