use rustyaztec::{encode_with_details, EncodeOptions};

fn main() {
    rustyaztec::tracing_init::init_tracing();

    let payload = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, World!".to_string());

    match encode_with_details(payload.as_bytes(), &EncodeOptions::default()) {
        Ok((symbol, config)) => {
            println!(
                "{} {} layers, {}x{} modules, {} data + {} parity codewords at {} bits",
                if config.compact { "compact" } else { "full" },
                config.layers,
                symbol.size(),
                symbol.size(),
                config.data_codewords,
                config.parity_codewords,
                config.word_size,
            );
            println!("{}", symbol.render());
        }
        Err(e) => eprintln!("encoding failed: {e}"),
    }
}
