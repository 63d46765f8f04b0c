//! Per-run REPL state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::{NamedResource, Page, PokeApiClient};
use crate::error::Result;
use crate::repl::Pokedex;

/// Where `map` and `mapb` go next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl PageCursor {
    /// Takes both links from a freshly fetched page.
    pub fn advance<T>(&mut self, page: &Page<T>) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

/// State shared by all commands during one REPL run.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    pub client: PokeApiClient,
    pub cursor: PageCursor,
    pub pokedex: Pokedex,
    pub rng: R,
}

impl Session<StdRng> {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(client: PokeApiClient, rng: R) -> Self {
        Self {
            client,
            cursor: PageCursor::default(),
            pokedex: Pokedex::new(),
            rng,
        }
    }

    /// Fetches a page of location areas and moves the cursor to it.
    ///
    /// The cursor is left untouched when the fetch fails.
    pub async fn load_location_page(
        &mut self,
        url: Option<&str>,
    ) -> Result<Page<NamedResource>> {
        let page = self.client.location_areas(url).await?;
        self.cursor.advance(&page);
        Ok(page)
    }
}
