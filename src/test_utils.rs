#[cfg(test)]
pub mod test_helpers {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::{Config, MentorMode};
    use crate::form::FormField;

    /// Config with no mock delay so tests settle quickly
    pub fn test_config(mode: MentorMode) -> Config {
        let mut config = Config::default();
        config.mentor.mode = mode;
        config.mentor.mock_delay_ms = 0;
        config.notification.duration_ms = 60_000;
        config
    }

    /// App without a worker; submissions that pass validation fail to send
    pub fn test_app(mode: MentorMode) -> App {
        App::new(&test_config(mode))
    }

    /// App wired to a real worker thread
    pub fn test_app_with_worker(config: &Config) -> App {
        let mut app = App::new(config);
        app.start_worker(&config.mentor);
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn fill_form(app: &mut App, name: &str, interests: &str, skills: &str) {
        app.form.set_value(FormField::Name, name);
        app.form.set_value(FormField::Interests, interests);
        app.form.set_value(FormField::Skills, skills);
    }

    /// Tick the app until the busy flag clears. Returns false on timeout.
    pub fn wait_for_settle(app: &mut App, timeout_ms: u64) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.tick();
            if !app.mentor.is_loading() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        false
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    /// One-shot HTTP server answering a single request with a canned response
    pub struct CannedServer {
        pub base_url: String,
        handle: JoinHandle<String>,
    }

    impl CannedServer {
        /// Wait for the request to arrive and return it, lowercased
        pub fn received_request(self) -> String {
            self.handle.join().unwrap().to_lowercase()
        }
    }

    pub fn serve_once(status: u16, body: &str) -> CannedServer {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_http_request(&mut stream);

            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        CannedServer {
            base_url: format!("http://{}/v1", addr),
            handle,
        }
    }

    fn read_http_request(stream: &mut std::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            if let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&data).to_string()
    }
}
