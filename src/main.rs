// --- TimelyFlow: generador de horarios institucional - Archivo principal ---

use timelyflow::run_server;
use timelyflow::storage::DataPaths;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let bind = std::env::var("TIMELYFLOW_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let paths = DataPaths::from_env();

    println!("=== TimelyFlow – Generador de Horarios (API) ===");
    println!("Datos en {:?}", paths.base());
    println!("Iniciando servidor en http://{}", bind);
    run_server(&bind, paths).await
}
