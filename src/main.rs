fn main() {
    // The viewer only runs in the browser; native builds exist for tests.
    #[cfg(target_arch = "wasm32")]
    problem_viewer::start();
}
