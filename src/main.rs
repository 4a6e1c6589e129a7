fn main() {
    basalt::uci::run_loop();
}
