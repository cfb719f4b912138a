//! Service wiring from configuration

use pawnkyc::adapters::extractor::build_extractor;
use pawnkyc::adapters::file::JsonFileKycStore;
use pawnkyc::config::KycConfig;
use pawnkyc::core::services::KycService;

/// Build the verification service the config describes
pub fn build_service(config: &KycConfig) -> KycService {
    log::debug!(
        "extractor={} store={}",
        config.extractor.backend,
        config.store.dir.display()
    );
    KycService::new(
        build_extractor(config.extractor.backend),
        Box::new(JsonFileKycStore::new(config.store.dir.clone())),
        config.engine.locale.clone(),
    )
}
