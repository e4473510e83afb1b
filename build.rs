#[cfg(feature = "skeptic")]
extern crate skeptic;

fn main() {
    // Every rust block in the README is compiled and run as a test
    // by `tests/skeptic.rs`.
    #[cfg(feature = "skeptic")]
    {
        println!("cargo:rerun-if-changed=README.md");
        skeptic::generate_doc_tests(&["README.md"]);
    }
}
