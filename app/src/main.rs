fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    wasm_bindgen_futures::spawn_local(npbtn::browser::on_loaded());
}
