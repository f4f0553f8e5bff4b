use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::ServeRoot;
use crate::handler;
use crate::http::parser::parse_request;
use crate::http::reader::read_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// One accepted connection, served until the peer goes away or a
/// response carries `Connection: close`.
pub struct Connection<S> {
    stream: BufReader<S>,
    root: ServeRoot,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = close after write?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: ServeRoot) -> Self {
        Self {
            stream: BufReader::new(stream),
            root,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match read_request(&mut self.stream).await {
                        Some(raw) => ConnectionState::Processing(parse_request(raw)),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    tracing::debug!(request = %req.summary(), "request received");

                    self.state = match handler::handle_request(&req, &self.root).await {
                        Some(response) => {
                            let close = response.must_close();
                            ConnectionState::Writing(ResponseWriter::new(&response), close)
                        }
                        // Nothing to send; wait for the next request.
                        None => ConnectionState::Reading,
                    };
                }

                ConnectionState::Writing(writer, close) => {
                    let written = writer.write_to_stream(&mut self.stream).await?;
                    tracing::debug!(bytes = written, close, "response sent");

                    if close {
                        if let Err(e) = self.stream.shutdown().await {
                            tracing::debug!(error = %e, "shutdown after Connection: close failed");
                        }
                        self.state = ConnectionState::Closed;
                    } else {
                        self.state = ConnectionState::Reading; // go back for next request
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
