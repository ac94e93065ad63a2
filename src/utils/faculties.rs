use log::{debug, warn};
use crate::error::Result;
use crate::utils::extract::{extract_cells, TableSelector, INDENTED_CELLS};
use crate::utils::grades::STATS_PATH;
use crate::utils::session::Session;

// Without filters the stats page lists the faculties instead of grades.
pub async fn retrieve_faculty_cells(session: &Session) -> Result<Vec<String>> {
    let html = session.fetch(STATS_PATH, &[]).await?;
    list_faculty_cells(&html)
}

// Raw cells of the faculty overview table.
// TODO: build `Faculty` values once the id/name layout of these cells is pinned down on a live page.
pub fn list_faculty_cells(html: &str) -> Result<Vec<String>> {
    let cells = extract_cells(html, STATS_PATH, &TableSelector::First, &INDENTED_CELLS)?;
    debug!("Faculty overview has {} cells: {:?}", cells.len(), cells);
    if cells.is_empty() {
        warn!("Faculty overview table has no indented cells");
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const OVERVIEW: &str = r#"
        <html><body>
        <table>
          <tr><td class="odsazena">Fakulta informatiky a informačných technológií</td><td class="odsazena">70</td></tr>
          <tr><td class="odsazena">Strojnícka fakulta</td><td>21</td></tr>
        </table>
        <table><tr><td class="odsazena">footer</td></tr></table>
        </body></html>"#;

    #[test]
    fn reads_cells_of_first_table_only() {
        let cells = list_faculty_cells(OVERVIEW).unwrap();
        assert_eq!(
            cells,
            vec!["Fakulta informatiky a informačných technológií", "70", "Strojnícka fakulta"]
        );
    }

    #[test]
    fn page_without_table_fails() {
        let err = list_faculty_cells("<html><body>Prihlásenie</body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::Extraction { .. }));
    }

    #[tokio::test]
    async fn overview_is_fetched_without_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STATS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(OVERVIEW))
            .mount(&server)
            .await;

        let session = Session::new(Url::parse(&server.uri()).unwrap()).unwrap();
        let cells = retrieve_faculty_cells(&session).await.unwrap();
        assert_eq!(cells.len(), 3);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }
}
