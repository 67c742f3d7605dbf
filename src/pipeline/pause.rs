use crate::core::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Print `prompt` and block until the user submits a line.
///
/// End of input releases the pause as well, so a launcher started with a
/// closed or redirected stdin still exits.
pub async fn pause<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    input.read_line(&mut line).await?;

    if line.is_empty() {
        // EOF: keep the terminal tidy for whatever prints next.
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}
