//! Structural pattern: Bridge
//! Example: one UI renderer over interchangeable per-OS backends
//!
//! Run with: cargo run --bin structural_bridge

#[derive(Debug, Clone, Copy)]
enum Os {
    MacOs,
    Windows,
    Linux,
}

/// The implementation side of the bridge.
trait OsBackend {
    fn draw_window(&self) -> String;
}

struct WindowsBackend;

impl OsBackend for WindowsBackend {
    fn draw_window(&self) -> String {
        "Windows window".to_string()
    }
}

struct MacBackend;

impl OsBackend for MacBackend {
    fn draw_window(&self) -> String {
        "Mac window".to_string()
    }
}

struct LinuxBackend;

impl OsBackend for LinuxBackend {
    fn draw_window(&self) -> String {
        "Linux window".to_string()
    }
}

/// The abstraction side: UI code talks to this and never to a backend.
struct UiRenderer {
    backend: Box<dyn OsBackend>,
}

impl UiRenderer {
    fn new(os: Os) -> Self {
        UiRenderer {
            backend: Self::backend_for(os),
        }
    }

    fn set_os(&mut self, os: Os) {
        self.backend = Self::backend_for(os);
    }

    fn backend_for(os: Os) -> Box<dyn OsBackend> {
        match os {
            Os::Windows => Box::new(WindowsBackend),
            Os::MacOs => Box::new(MacBackend),
            Os::Linux => Box::new(LinuxBackend),
        }
    }

    fn draw_window(&self) -> String {
        self.backend.draw_window()
    }
}

fn main() {
    let mut renderer = UiRenderer::new(Os::Windows);
    println!("{}", renderer.draw_window());

    renderer.set_os(Os::MacOs);
    println!("{}", renderer.draw_window());

    renderer.set_os(Os::Linux);
    println!("{}", renderer.draw_window());
}
