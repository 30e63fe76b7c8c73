fn main() {
    vivercom_lib::run()
}
