//! Service HTTP — POST /api/v1/calculate
//!
//! Entrée  : `{"expression": "..."}`
//! Sortie  : `{"result": 7}` ou `{"error": "..."}`
//!
//! Codes : 200 succès, 400 JSON illisible, 405 autre méthode que POST,
//! 422 expression invalide, 500 division par zéro.
//! Arrêt propre sur SIGINT / SIGTERM, ou "exit" tapé sur l’entrée standard.

use std::io::{self, BufRead};
use std::net::SocketAddr;

use anyhow::Context;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use calculatrice_rpn::{evaluate, ErrorKind};

use crate::console::COMMANDE_SORTIE;

pub const CHEMIN_CALCUL: &str = "/api/v1/calculate";

#[derive(Debug, Deserialize)]
pub struct Requete {
    pub expression: String,
}

#[derive(Debug, Serialize)]
pub struct Reponse {
    pub result: f64,
}

#[derive(Debug, Serialize)]
pub struct ReponseErreur {
    pub error: String,
}

/// Erreur rendue au client : statut HTTP + corps `{"error": ...}`.
#[derive(Debug)]
pub struct ErreurHttp {
    pub statut: StatusCode,
    pub message: String,
}

impl ErreurHttp {
    pub fn requete_mal_formee(message: impl Into<String>) -> Self {
        Self {
            statut: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

/// InvalidExpression est une faute du client, DivideByZero une faute de calcul.
pub fn statut_pour(e: ErrorKind) -> StatusCode {
    match e {
        ErrorKind::InvalidExpression => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::DivideByZero => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ErrorKind> for ErreurHttp {
    fn from(e: ErrorKind) -> Self {
        Self {
            statut: statut_pour(e),
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ErreurHttp {
    fn into_response(self) -> Response {
        if self.statut.is_server_error() {
            tracing::error!(statut = %self.statut.as_u16(), message = %self.message, "réponse d’erreur serveur");
        } else {
            tracing::warn!(statut = %self.statut.as_u16(), message = %self.message, "réponse d’erreur client");
        }

        (
            self.statut,
            Json(ReponseErreur {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Routes du service. Les autres méthodes sur le chemin reçoivent 405 (axum).
pub fn routes() -> Router {
    Router::new().route(CHEMIN_CALCUL, post(calculer))
}

/// Handler pour POST /api/v1/calculate.
///
/// Le corps est lu à la main : tout JSON illisible (ou sans `expression`) donne 400.
async fn calculer(corps: Bytes) -> Result<Json<Reponse>, ErreurHttp> {
    let requete: Requete = serde_json::from_slice(&corps)
        .map_err(|e| ErreurHttp::requete_mal_formee(format!("corps JSON invalide: {e}")))?;

    let result = evaluate(&requete.expression)?;
    tracing::debug!(expression = %requete.expression, resultat = result, "calcul servi");

    Ok(Json(Reponse { result }))
}

/// Écoute sur toutes les interfaces, port `port`, jusqu’au signal d’arrêt.
pub async fn servir(port: u16) -> anyhow::Result<()> {
    let adresse = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(adresse)
        .await
        .with_context(|| format!("écoute impossible sur {adresse}"))?;

    tracing::info!(adresse = %adresse, chemin = CHEMIN_CALCUL, "serveur démarré");

    axum::serve(listener, routes())
        .with_graceful_shutdown(signal_arret())
        .await
        .context("erreur du serveur")?;

    tracing::info!(adresse = %adresse, "serveur arrêté");
    Ok(())
}

async fn signal_arret() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(erreur = %e, "SIGINT non surveillé");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(erreur = %e, "SIGTERM non surveillé");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT reçu, arrêt"),
        _ = terminate => tracing::info!("SIGTERM reçu, arrêt"),
        _ = commande_exit() => tracing::info!("commande de sortie reçue, arrêt"),
    }
}

/// Se termine quand "exit" est lu sur stdin. Fin de flux : on attend les signaux.
async fn commande_exit() {
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    std::thread::spawn(move || {
        for ligne in io::stdin().lock().lines() {
            let Ok(ligne) = ligne else {
                break;
            };
            if ligne.trim() == COMMANDE_SORTIE {
                let _ = tx.send(());
                return;
            }
        }
    });

    if rx.await.is_err() {
        std::future::pending::<()>().await;
    }
}
