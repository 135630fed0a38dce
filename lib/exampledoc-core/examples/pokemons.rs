use exampledoc_core::{
    ApiDocument, Example, ExampleDetails, ExampleHeaders, ExamplePrinter, PrinterConfig,
    RecordedRequest, RecordedResponse,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .pretty()
        .init();

    // Only `Content-Type` plus these headers show up in the documentation keys
    let config = PrinterConfig::new().with_headers_whitelist(["X-Auth-Token", "Content-Encoding"]);

    let json = ExampleHeaders::from_iter([("Content-Type", "application/json")]);
    let examples = [
        Example {
            details: ExampleDetails::new("Creates a Pokemon", "Pokemons").with_route("POST", "/pokemons"),
            request: RecordedRequest {
                headers: json.clone(),
                body: r#"{"name":"Pikachu","type":"Electric"}"#.to_string(),
            },
            response: RecordedResponse {
                status: 201,
                headers: json.clone(),
                body: r#"{"id":1,"name":"Pikachu","type":"Electric"}"#.to_string(),
            },
        },
        Example {
            details: ExampleDetails::new("Rejects an anonymous creation", "Pokemons")
                .with_route("POST", "/pokemons"),
            request: RecordedRequest {
                headers: ExampleHeaders::from_iter([
                    ("Content-Type", "application/json"),
                    ("X-Auth-Token", "invalid"),
                ]),
                body: r#"{"name":"Mew"}"#.to_string(),
            },
            response: RecordedResponse {
                status: 401,
                headers: ExampleHeaders::from_iter([
                    ("Content-Type", "application/json"),
                    ("Content-Encoding", "gzip"),
                ]),
                body: r#"{"error":"unauthorized"}"#.to_string(),
            },
        },
    ];

    // One document per endpoint, owned here and serialized at the end
    let mut document = ApiDocument::new();
    let mut printer = ExamplePrinter::new(&mut document, &config);
    for example in &examples {
        printer.print(example)?;
    }
    info!(responses = document.responses().len(), "examples printed");

    let out = serde_saphyr::to_string(&document)?;
    println!("{out}");

    let operation = serde_saphyr::to_string(&document.to_operation("createPokemon"))?;
    println!("{operation}");

    Ok(())
}
