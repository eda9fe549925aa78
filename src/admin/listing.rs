// src/admin/listing.rs

use std::fmt::Write;

use super::api::{ApiResource, CrudApi};

/// Uma coluna da tabela: cabeçalho e como extrair o texto da linha.
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, value: fn(&T) -> String) -> Self {
        Self { header, value }
    }
}

pub struct ListingConfig<T> {
    /// Nome no singular, usado nas mensagens de salvar/remover ("movie")
    pub entity_name: &'static str,
    /// Título da listagem ("Movies")
    pub label: &'static str,
    pub columns: Vec<Column<T>>,
}

/// Listagem genérica de uma entidade.
///
/// Mantém a última coleção carregada, o termo de busca e um alerta
/// descartável. Toda escrita bem-sucedida recarrega a coleção inteira, então
/// as linhas refletem sempre o que está persistido. Falhas da API nunca
/// propagam: viram o alerta.
pub struct EntityListing<R: ApiResource, A> {
    config: ListingConfig<R::Record>,
    api: A,
    rows: Vec<R::Record>,
    search: String,
    alert: Option<String>,
}

impl<R, A> EntityListing<R, A>
where
    R: ApiResource,
    A: CrudApi<R>,
{
    pub fn new(config: ListingConfig<R::Record>, api: A) -> Self {
        Self {
            config,
            api,
            rows: Vec::new(),
            search: String::new(),
            alert: None,
        }
    }

    pub fn rows(&self) -> &[R::Record] {
        &self.rows
    }

    /// Busca a coleção completa. Em caso de erro as linhas anteriores ficam.
    pub async fn load(&mut self) -> bool {
        match self.api.list().await {
            Ok(rows) => {
                self.rows = rows;
                self.alert = None;
                true
            }
            Err(e) => {
                tracing::warn!("Falha ao carregar {}: {}", self.config.label, e);
                self.alert = Some(format!("Could not load {} data: {}", self.config.label, e));
                false
            }
        }
    }

    pub async fn save_new(&mut self, draft: &R::Create) -> bool {
        match self.api.create(draft).await {
            Ok(()) => self.load().await,
            Err(e) => {
                self.alert = Some(format!("Failed to save {}: {}", self.config.entity_name, e));
                false
            }
        }
    }

    pub async fn save_existing(&mut self, id: i32, patch: &R::Update) -> bool {
        match self.api.update(id, patch).await {
            Ok(()) => self.load().await,
            Err(e) => {
                self.alert = Some(format!("Failed to save {}: {}", self.config.entity_name, e));
                false
            }
        }
    }

    pub async fn delete(&mut self, id: i32) -> bool {
        match self.api.remove(id).await {
            Ok(()) => self.load().await,
            Err(e) => {
                self.alert = Some(format!("Failed to delete {}: {}", self.config.entity_name, e));
                false
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Linhas cujo texto em alguma coluna contém o termo de busca (sem
    /// diferenciar maiúsculas). Termo vazio devolve tudo.
    pub fn filtered(&self) -> Vec<&R::Record> {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return self.rows.iter().collect();
        }

        self.rows
            .iter()
            .filter(|row| {
                self.config
                    .columns
                    .iter()
                    .any(|column| (column.value)(row).to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Tabela em texto puro com as linhas filtradas.
    pub fn render(&self) -> String {
        let headers: Vec<&str> = self.config.columns.iter().map(|c| c.header).collect();
        let cells: Vec<Vec<String>> = self
            .filtered()
            .into_iter()
            .map(|row| self.config.columns.iter().map(|c| (c.value)(row)).collect())
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.config.label);
        if let Some(alert) = &self.alert {
            let _ = writeln!(out, "! {alert}");
        }

        write_line(&mut out, headers.iter().copied(), &widths);
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(&mut out, separator.iter().map(String::as_str), &widths);

        if cells.is_empty() {
            let _ = writeln!(out, "(no {} found)", self.config.label.to_lowercase());
        }
        for line in &cells {
            write_line(&mut out, line.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn write_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    };

    use async_trait::async_trait;
    use chrono::Utc;
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        admin::{api::Theaters, pages::theater_listing_config, ClientError},
        models::theater::{CreateTheaterPayload, Theater, TheaterType, UpdateTheaterPayload},
    };

    // API falsa em memória, com uma chave para simular a API fora do ar
    #[derive(Default)]
    struct FakeTheaters {
        rows: Mutex<Vec<Theater>>,
        offline: AtomicBool,
    }

    impl FakeTheaters {
        fn check_online(&self) -> Result<(), ClientError> {
            if self.offline.load(Ordering::SeqCst) {
                return Err(ClientError::Api {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    message: "fora do ar".into(),
                });
            }
            Ok(())
        }

        fn not_found(id: i32) -> ClientError {
            ClientError::Api {
                status: StatusCode::NOT_FOUND,
                message: format!("Sala com ID #{id} não encontrado"),
            }
        }
    }

    #[async_trait]
    impl CrudApi<Theaters> for FakeTheaters {
        async fn list(&self) -> Result<Vec<Theater>, ClientError> {
            self.check_online()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, draft: &CreateTheaterPayload) -> Result<(), ClientError> {
            self.check_online()?;
            let mut rows = self.rows.lock().unwrap();
            let now = Utc::now();
            let id = rows.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            rows.push(Theater {
                id,
                name: draft.name.clone(),
                number: draft.number,
                capacity: draft.capacity,
                theater_type: draft.theater_type,
                created_at: now,
                updated_at: now,
            });
            Ok(())
        }

        async fn update(&self, id: i32, patch: &UpdateTheaterPayload) -> Result<(), ClientError> {
            self.check_online()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| Self::not_found(id))?;
            if let Some(name) = &patch.name {
                row.name = name.clone();
            }
            if let Some(capacity) = patch.capacity {
                row.capacity = capacity;
            }
            Ok(())
        }

        async fn remove(&self, id: i32) -> Result<(), ClientError> {
            self.check_online()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|t| t.id != id);
            if rows.len() == before {
                return Err(Self::not_found(id));
            }
            Ok(())
        }
    }

    fn draft(name: &str, number: i32, theater_type: TheaterType) -> CreateTheaterPayload {
        CreateTheaterPayload {
            name: name.to_string(),
            number,
            capacity: 80,
            theater_type,
        }
    }

    fn listing(api: &Arc<FakeTheaters>) -> EntityListing<Theaters, Arc<FakeTheaters>> {
        EntityListing::new(theater_listing_config(), api.clone())
    }

    #[tokio::test]
    async fn writes_refetch_the_collection() {
        let api = Arc::new(FakeTheaters::default());
        let mut page = listing(&api);

        assert!(page.save_new(&draft("Sala Azul", 1, TheaterType::TwoD)).await);
        assert!(page.save_new(&draft("Sala Vermelha", 2, TheaterType::Imax)).await);
        assert_eq!(page.rows().len(), 2);

        let patch = UpdateTheaterPayload {
            capacity: Some(120),
            ..Default::default()
        };
        assert!(page.save_existing(1, &patch).await);
        assert_eq!(page.rows()[0].capacity, 120);

        assert!(page.delete(2).await);
        assert_eq!(page.rows().len(), 1);
        assert!(page.alert().is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_columns() {
        let api = Arc::new(FakeTheaters::default());
        let mut page = listing(&api);
        page.save_new(&draft("Sala Azul", 1, TheaterType::TwoD)).await;
        page.save_new(&draft("Sala Vermelha", 2, TheaterType::Imax)).await;

        page.set_search("AZUL");
        let found: Vec<&str> = page.filtered().into_iter().map(|t| t.name.as_str()).collect();
        assert_eq!(found, vec!["Sala Azul"]);

        // a coluna de tipo também participa da busca
        page.set_search("imax");
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.filtered()[0].number, 2);

        page.set_search("   ");
        assert_eq!(page.filtered().len(), 2);

        page.set_search("nada");
        assert!(page.filtered().is_empty());
        assert!(page.render().contains("(no theaters found)"));
    }

    #[tokio::test]
    async fn failed_load_keeps_rows_and_raises_alert() {
        let api = Arc::new(FakeTheaters::default());
        let mut page = listing(&api);
        page.save_new(&draft("Sala Azul", 1, TheaterType::TwoD)).await;

        api.offline.store(true, Ordering::SeqCst);
        assert!(!page.load().await);
        assert_eq!(page.rows().len(), 1);
        assert_eq!(
            page.alert(),
            Some("Could not load Theaters data: HTTP 503 Service Unavailable: fora do ar")
        );

        page.dismiss_alert();
        assert!(page.alert().is_none());
    }

    #[tokio::test]
    async fn failed_writes_surface_as_alerts() {
        let api = Arc::new(FakeTheaters::default());
        let mut page = listing(&api);

        assert!(!page.save_existing(9, &UpdateTheaterPayload::default()).await);
        assert!(page.alert().unwrap().starts_with("Failed to save theater:"));

        assert!(!page.delete(9).await);
        assert!(page.alert().unwrap().contains("Sala com ID #9 não encontrado"));
        assert!(page.render().contains("! Failed to delete theater:"));
    }

    #[tokio::test]
    async fn render_aligns_columns_under_headers() {
        let api = Arc::new(FakeTheaters::default());
        let mut page = listing(&api);
        page.save_new(&draft("Sala Azul", 1, TheaterType::ThreeD)).await;

        let table = page.render();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Theaters");
        assert!(lines[1].starts_with("ID | Name"));
        assert!(lines[2].starts_with("-- | ---------"));
        assert!(lines[3].starts_with("1  | Sala Azul"));
        assert!(lines[3].contains("3D"));
    }
}
