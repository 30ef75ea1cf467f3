fn main() {
    tmay::app::cli::run();
}
