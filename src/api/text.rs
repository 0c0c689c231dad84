use std::path::Path;

use crate::api::endpoint::Endpoint;
use crate::{CheckResult, Document, PlagtrackerClient, PlagtrackerResult, Response};

const SAMPLE_TEXT: &str = "The Simpsons is an American animated sitcom created by Matt Groening for the Fox Broadcasting Company. The series is a satirical parody of a middle class American lifestyle epitomized by its family of the same name, which consists of Homer, Marge, Bart, Lisa and Maggie. The show is set in the fictional town of Springfield and parodies American culture, society and many aspects of the human condition. Since its debut on December 17, 1989, the show has broadcast 500 episodes and the twenty-third season started airing on September 25, 2011. The Simpsons is the longest-running American sitcom, the longest-running American animated program, and in 2009 it surpassed Gunsmoke as the longest-running American primetime, scripted television series. The Simpsons Movie, a feature-length film, was released in theaters worldwide on July 26 and July 27, 2007, and grossed over $527 million.";

/// A paragraph of publicly available text, handy for trying out submissions.
pub fn sample_text() -> &'static str {
    SAMPLE_TEXT
}

/// Provides methods for submitting texts for checking and fetching the
/// outcome.
///
/// Every submission returns the hash the service assigned to the text, which
/// the other methods take to look the text up.
#[derive(Debug, Clone)]
pub struct TextHandler {
    client: PlagtrackerClient,
}

impl TextHandler {
    /// Creates a new text API instance.
    ///
    /// This method is intended for internal use by the Plagtracker client.
    pub(crate) fn new(client: PlagtrackerClient) -> Self {
        Self { client }
    }

    /// Sends a text for plagiarism checking.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use plagtracker_client::PlagtrackerClient;
    /// #
    /// # async fn example(client: &PlagtrackerClient) -> Result<(), plagtracker_client::PlagtrackerError> {
    /// let response = client.texts().submit(plagtracker_client::sample_text()).await?;
    ///
    /// if let Some(hash) = response.data() {
    ///     println!("Text submitted as {hash}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit(&self, text: impl AsRef<str>) -> PlagtrackerResult<Response<String>> {
        self.client
            .request(Endpoint::SubmitText, Some([("text", text.as_ref())]))
            .await
    }

    /// Sends the text of a web page for plagiarism checking.
    pub async fn submit_url(&self, url: impl AsRef<str>) -> PlagtrackerResult<Response<String>> {
        self.client
            .request(Endpoint::SubmitUrl, Some([("url", url.as_ref())]))
            .await
    }

    /// Reads a document from disk and sends it for plagiarism checking.
    ///
    /// # Errors
    ///
    /// Fails without contacting the service if the file type is not allowed,
    /// the file is larger than 10 MiB, or it cannot be read. See
    /// [`Document::from_path`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use plagtracker_client::PlagtrackerClient;
    /// #
    /// # async fn example(client: &PlagtrackerClient) -> Result<(), plagtracker_client::PlagtrackerError> {
    /// let response = client.texts().submit_file("thesis.docx").await?;
    /// println!("{}: {:?}", response.message(), response.data());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_file(&self, path: impl AsRef<Path>) -> PlagtrackerResult<Response<String>> {
        let document = Document::from_path(path).await?;
        self.submit_document(&document).await
    }

    /// Sends an in-memory document for plagiarism checking.
    pub async fn submit_document(&self, document: &Document) -> PlagtrackerResult<Response<String>> {
        self.client
            .request(Endpoint::SubmitFile, Some(document.form_fields()))
            .await
    }

    /// Gets how many percent of the text have been checked so far.
    ///
    /// The check is finished once this reaches 100.
    pub async fn status(&self, hash: &str) -> PlagtrackerResult<Response<u32>> {
        self.client
            .request(Endpoint::TextStatus(hash), None::<()>)
            .await
    }

    /// Gets the result of a finished check, with matching sources and the
    /// HTML report.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use plagtracker_client::PlagtrackerClient;
    /// #
    /// # async fn example(client: &PlagtrackerClient) -> Result<(), plagtracker_client::PlagtrackerError> {
    /// let response = client.texts().result("f00cdac492b59749e8ea7436cd7c8a96").await?;
    ///
    /// if let Some(result) = response.data() {
    ///     for source in &result.sources {
    ///         println!("{source}");
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn result(&self, hash: &str) -> PlagtrackerResult<Response<CheckResult>> {
        self.client
            .request(Endpoint::Result(hash), None::<()>)
            .await
    }

    /// Gets the plagiarism percent of the text.
    pub async fn plagiarism_percent(&self, hash: &str) -> PlagtrackerResult<Response<u32>> {
        self.client
            .request(Endpoint::PlagiarismPercent(hash), None::<()>)
            .await
    }

    /// Gets the submitted text back.
    pub async fn get(&self, hash: &str) -> PlagtrackerResult<Response<String>> {
        self.client.request(Endpoint::Text(hash), None::<()>).await
    }
}
