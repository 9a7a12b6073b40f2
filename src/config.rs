// src/config.rs
//
// Options de lancement (ligne de commande).
// Sans option : fenêtre. `--expr` : un calcul puis sortie. `--console` : boucle texte.
// `--serveur` : service HTTP sur `--port`.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "calculatrice_rpn", version, about = "Calculatrice + - * / ( ) en RPN")]
pub struct Config {
    /// Évalue une seule expression, affiche le résultat et quitte
    #[arg(short, long, value_name = "EXPR", conflicts_with = "console")]
    pub expr: Option<String>,

    /// Boucle interactive sur l’entrée standard ("exit" pour quitter)
    #[arg(short, long)]
    pub console: bool,

    /// Service HTTP : POST /api/v1/calculate
    #[arg(short, long, conflicts_with_all = ["expr", "console"])]
    pub serveur: bool,

    /// Port d’écoute du service HTTP
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Affiche aussi la démarche (jetons, RPN) en mode texte
    #[arg(short, long)]
    pub demarche: bool,

    /// Journal détaillé (niveau debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Filtre de journal explicite (syntaxe RUST_LOG), prioritaire sur tout le reste
    #[arg(long, value_name = "FILTRE")]
    pub log: Option<String>,
}

impl Config {
    /// Filtre de journal : `--log`, sinon RUST_LOG, sinon debug si `--verbose`,
    /// sinon info en mode serveur (démarrage/arrêt visibles), sinon warn.
    pub fn filtre_journal(&self, rust_log: Option<&str>) -> String {
        if let Some(f) = &self.log {
            return f.clone();
        }
        if let Some(f) = rust_log.filter(|f| !f.trim().is_empty()) {
            return f.to_string();
        }
        if self.verbose {
            "debug".to_string()
        } else if self.serveur {
            "info".to_string()
        } else {
            "warn".to_string()
        }
    }
}
