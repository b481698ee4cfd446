fn main() {
    stout::cli::run();
}
