use std::env;
use std::fs;
use std::path::Path;

// Variables que la app lee con option_env! (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &[
    "DOCUMENT_SCANNER_SDK_BASE_URL",
    "DOCUMENT_SCANNER_SDK_PACKAGE",
    "DOCUMENT_SCANNER_SDK_VERSION",
    "DOCUMENT_SCANNER_SDK_BUNDLE",
    "DOCUMENT_SCANNER_LICENSE",
    "CAPTURE_WIDTH",
    "CAPTURE_HEIGHT",
    "DOWNLOAD_FILE_PREFIX",
    "ROOT_ELEMENT_ID",
    "ENABLE_LOGGING",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
                        continue;
                    }

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No hay archivo .env. Sin DOCUMENT_SCANNER_LICENSE el scanner no podrá inicializarse. Copia .env.example a .env.");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
