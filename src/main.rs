use tracing::info;
use tracing_subscriber::EnvFilter;
use unirank::config::Config;
use unirank::domain::storage::Storage;
use unirank::error::Result;
use unirank::infrastructure::FileSystemStore;
use unirank::services::RankService;

fn main() -> Result<()> {
    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.args.log_level))
        .init();

    let store = FileSystemStore::new(
        config.args.snapshot_file.clone(),
        config.args.params_file.clone(),
        config.args.output_file.clone(),
    );

    let snapshot = store.load_snapshot()?;
    let params = config.resolve_params(store.load_params()?)?;

    let mut service = RankService::new(snapshot);
    let ranked = service.recompute(&params)?;

    store.save_rankings(&ranked)?;

    if config.args.output_file.is_none() {
        for university in ranked.universities.iter().take(10) {
            info!(
                "#{:<3} {:<40} score {:>8} ({} repos)",
                university.rank, university.name, university.score, university.repos_contributed
            );
        }
    }

    info!("Ranking completed successfully!");
    Ok(())
}
