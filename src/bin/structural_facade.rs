//! Structural pattern: Facade
//! Example: one entry point over an analyze/compile/run toolchain
//!
//! Run with: cargo run --bin structural_facade

use colored::Colorize;

/* ============================================================
 * Subsystems
 * ============================================================
 */

struct StaticAnalyzer;

impl StaticAnalyzer {
    fn analyze(&self, source: &str) -> usize {
        println!("Analyzing {} lines..", source.lines().count());
        source.lines().count()
    }
}

struct BinaryData {
    bytes: usize,
}

struct Compiler;

impl Compiler {
    fn compile(&self, source: &str) -> BinaryData {
        println!("Compiling..");
        BinaryData {
            bytes: source.len(),
        }
    }
}

struct Runtime;

impl Runtime {
    fn execute(&self, binary: &BinaryData) {
        println!("Executing {} bytes..", binary.bytes);
    }
}

/* ============================================================
 * Facade
 * ============================================================
 */

/// Callers get one `start`; the subsystem choreography stays in here.
struct Framework {
    analyzer: StaticAnalyzer,
    compiler: Compiler,
    runtime: Runtime,
}

impl Framework {
    fn new() -> Self {
        Framework {
            analyzer: StaticAnalyzer,
            compiler: Compiler,
            runtime: Runtime,
        }
    }

    fn start(&self, source: &str) {
        self.analyzer.analyze(source);
        println!("{}", "Analyzing complete!".green());

        let binary = self.compiler.compile(source);
        println!("{}", "Compiling complete!".green());

        self.runtime.execute(&binary);
        println!("{}", "App is running".bold().green());
    }
}

fn main() {
    let source = "fn main() {\n    println!(\"hi\");\n}\n";
    Framework::new().start(source);
}
