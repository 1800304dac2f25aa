mod get_catalog;

pub use get_catalog::GetCatalogUseCase;
