mod backend;
mod frontend;


fn main() {
    frontend::cli::cli();
}
