use folio_client::http_client::HttpDocumentClient;
use folio_client::AttachmentResolver;
use folio_client::DocumentClientBox;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub struct BackendManager {}

impl BackendManager {
    pub fn client() -> DocumentClientBox {
        return Box::new(HttpDocumentClient::new(Config::get(ConfigKey::BackendURL)));
    }

    pub fn resolver() -> AttachmentResolver {
        return AttachmentResolver::new(&Config::get(ConfigKey::BackendURL));
    }
}
