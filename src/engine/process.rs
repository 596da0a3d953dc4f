use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use serde_json::Value;

use super::errors::EngineError;
use super::{CommandParser, ParseRequest};
use crate::config::EngineSettings;
use crate::record::Record;

/// Runs an external program that reads CLI text on stdin and prints the
/// parsed structure as a JSON object on stdout.
#[derive(Debug, Clone)]
pub struct ProcessParser {
    program: String,
    args: Vec<String>,
}

impl ProcessParser {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
        }
    }

    fn render_args(&self, request: &ParseRequest<'_>) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{os}", request.os)
                    .replace("{parser}", request.parser)
                    .replace("{device}", request.device_name)
            })
            .collect()
    }
}

impl CommandParser for ProcessParser {
    fn parse(&self, request: &ParseRequest<'_>) -> Result<Record, EngineError> {
        let args = self.render_args(request);
        tracing::debug!(program = %self.program, ?args, "spawning parser");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        let io_error = |e| EngineError::Io {
            program: self.program.clone(),
            source: e,
        };

        // Feed stdin from its own thread so a child that writes before it
        // finishes reading, or exits without reading, cannot stall us.
        let stdin = child.stdin.take();
        let (output, fed) = thread::scope(|scope| {
            let feeder = stdin.map(|mut stdin| {
                scope.spawn(move || stdin.write_all(request.cli_output.as_bytes()))
            });
            let output = child.wait_with_output();
            let fed = match feeder {
                Some(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked"))),
                None => Ok(()),
            };
            (output, fed)
        });
        let output = output.map_err(io_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("parser exited with {}", output.status)
            } else {
                stderr
            };
            return Err(EngineError::Rejected {
                parser: request.parser.to_string(),
                os: request.os.to_string(),
                message,
            });
        }

        match fed {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!(program = %self.program, "parser exited before reading all input");
            }
            Err(e) => return Err(io_error(e)),
            Ok(()) => {}
        }

        let value: Value =
            serde_json::from_slice(&output.stdout).map_err(|e| EngineError::InvalidOutput {
                parser: request.parser.to_string(),
                source: e,
            })?;

        match value {
            Value::Object(record) => Ok(record),
            _ => Err(EngineError::NotAMapping {
                parser: request.parser.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ParseRequest<'static> {
        ParseRequest {
            device_name: "SW1",
            os: "nxos",
            parser: "show vlan",
            cli_output: "VLAN Name\n1 default\n",
        }
    }

    #[test]
    fn placeholders_are_substituted() {
        let parser = ProcessParser::new(&EngineSettings::default());
        assert_eq!(
            parser.render_args(&request()),
            vec!["--os", "nxos", "--parser", "show vlan", "--device", "SW1"]
        );
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let parser = ProcessParser::new(&EngineSettings {
            program: "definitely-not-a-real-parser-binary".to_string(),
            args: vec![],
        });
        assert!(matches!(
            parser.parse(&request()),
            Err(EngineError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn json_object_on_stdout_becomes_record() {
        let parser = ProcessParser::new(&EngineSettings {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                r#"cat >/dev/null; echo '{"vlans": {"1": {"name": "{device}"}}}'"#.to_string(),
            ],
        });
        let record = parser.parse(&request()).unwrap();
        assert_eq!(record["vlans"]["1"]["name"], "SW1");
    }

    #[cfg(unix)]
    #[test]
    fn rejection_without_reading_large_input_keeps_stderr() {
        let parser = ProcessParser::new(&EngineSettings {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                "echo 'unsupported command' >&2; exit 3".to_string(),
            ],
        });
        let cli_output = "Eth1/1  connected  1  full  10G\n".repeat(20_000);
        let request = ParseRequest {
            device_name: "SW1",
            os: "nxos",
            parser: "show vlan",
            cli_output: &cli_output,
        };

        match parser.parse(&request) {
            Err(EngineError::Rejected { message, .. }) => {
                assert_eq!(message, "unsupported command")
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn large_output_while_reading_does_not_stall() {
        let parser = ProcessParser::new(&EngineSettings {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                r#"printf '{"pad": "'; head -c 200000 /dev/zero | tr '\0' x; printf '"}'; cat >/dev/null"#
                    .to_string(),
            ],
        });
        let cli_output = "x".repeat(200_000);
        let request = ParseRequest {
            device_name: "SW1",
            os: "nxos",
            parser: "show vlan",
            cli_output: &cli_output,
        };

        let record = parser.parse(&request).unwrap();
        assert_eq!(record["pad"].as_str().map(str::len), Some(200_000));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_rejected_with_stderr() {
        let parser = ProcessParser::new(&EngineSettings {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                "cat >/dev/null; echo 'unsupported command' >&2; exit 3".to_string(),
            ],
        });
        match parser.parse(&request()) {
            Err(EngineError::Rejected { message, .. }) => {
                assert_eq!(message, "unsupported command")
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_object_output_is_rejected() {
        let parser = ProcessParser::new(&EngineSettings {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "cat >/dev/null; echo '[1, 2]'".to_string()],
        });
        assert!(matches!(
            parser.parse(&request()),
            Err(EngineError::NotAMapping { .. })
        ));
    }
}
