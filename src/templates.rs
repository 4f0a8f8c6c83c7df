//! Static file payloads written into a new project.
//!
//! Each stack is a table of relative path to content. The writer in
//! [`crate::writer`] never looks inside them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A file to be written at `relative_path` below a stack directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub relative_path: &'static str,
    pub content: &'static str,
}

const SERVER_JS: &str = r#"const express = require("express");
const mongoose = require("mongoose");
const cors = require("cors");
require("dotenv").config();

const app = express();

// Middleware
app.use(cors());
app.use(express.json());

// MongoDB connection
const PORT = process.env.PORT || 5000;
const MONGO_URI = process.env.MONGO_URI || "mongodb://localhost:27017/mernDB";

mongoose
  .connect(MONGO_URI)
  .then(() => {
    console.log("Connected to MongoDB");
    app.listen(PORT, () => console.log(`Server running on port ${PORT}`));
  })
  .catch((err) => console.error("MongoDB connection error:", err));

// Example route
app.get("/", (req, res) => {
  res.send("Hello from the backend!");
});
    "#;

const DOT_ENV: &str = r#"PORT=5000
MONGO_URI=mongodb://localhost:27017/mernDB
    "#;

const APP_JSX: &str = r#"import React from "react";
import Toastify from "toastify-js";
import "toastify-js/src/toastify.css";

const App = () => {
  const showToast = () => {
    Toastify({
      text: "Welcome to Your MERN Project!",
      duration: 3000,
      close: true,
      gravity: "top",
      position: "center",
      backgroundColor: "linear-gradient(to right, #4caf50, #81c784)",
      stopOnFocus: true,
    }).showToast();
  };

  return (
    <div className="flex flex-col items-center justify-center h-screen bg-gray-100">
      <h1 className="text-3xl font-bold mb-4">Welcome to Your MERN Project!</h1>
      <button
        onClick={showToast}
        className="bg-blue-500 text-white px-4 py-2 rounded shadow hover:bg-blue-600"
      >
        Show Toast Notification
      </button>
    </div>
  );
};

export default App;
    "#;

const INDEX_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;
    "#;

// The first two import lines carry a trailing space.
const MAIN_JSX: &str = concat!(
    "import React from 'react'; \n",
    "import { StrictMode } from 'react'; \n",
    r#"import { createRoot } from 'react-dom/client';
import './index.css';
import App from './App.jsx';

createRoot(document.getElementById('root')).render(
  <StrictMode>
    <App />
  </StrictMode>,
);
  "#
);

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>MERN App</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>"#;

const TAILWIND_CONFIG_JS: &str = r#"module.exports = {
    content: ["./src/**/*.{js,jsx,ts,tsx}"],
    theme: {
        extend: {},
    },
    plugins: [],
};
    "#;

/// Files written into `<root>/backend`
pub const BACKEND_FILES: &[TemplateFile] = &[
    TemplateFile {
        relative_path: "server.js",
        content: SERVER_JS,
    },
    TemplateFile {
        relative_path: ".env",
        content: DOT_ENV,
    },
];

/// Entry components and markup written into `<root>/frontend`
pub const FRONTEND_FILES: &[TemplateFile] = &[
    TemplateFile {
        relative_path: "src/App.jsx",
        content: APP_JSX,
    },
    TemplateFile {
        relative_path: "src/index.css",
        content: INDEX_CSS,
    },
    TemplateFile {
        relative_path: "src/main.jsx",
        content: MAIN_JSX,
    },
    TemplateFile {
        relative_path: "index.html",
        content: INDEX_HTML,
    },
];

/// Tailwind config, written after `tailwindcss init` so it wins over the generated one
pub const FRONTEND_BUILD_CONFIG: &[TemplateFile] = &[TemplateFile {
    relative_path: "tailwind.config.js",
    content: TAILWIND_CONFIG_JS,
}];

/// File name of the npm manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Script aliases in the frontend manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestScripts {
    pub dev: String,
    pub build: String,
    pub preview: String,
}

/// The frontend `package.json`, replacing whatever `npm init` generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub main: String,
    pub scripts: ManifestScripts,
    pub dependencies: Map<String, Value>,
}

/// Pinned frontend dependency ranges, in manifest order
pub const FRONTEND_DEPENDENCY_RANGES: &[(&str, &str)] = &[
    ("react", "^19.0.0"),
    ("react-dom", "^19.0.0"),
    ("tailwindcss", "^3.4.17"),
    ("vite", "^6.0.7"),
    ("toastify-js", "^1.13.2"),
];

impl PackageManifest {
    /// The hard-coded frontend manifest
    pub fn frontend() -> Self {
        let dependencies = FRONTEND_DEPENDENCY_RANGES
            .iter()
            .map(|(name, range)| (name.to_string(), Value::String(range.to_string())))
            .collect();

        Self {
            name: "frontend".to_string(),
            version: "1.0.0".to_string(),
            main: "src/main.jsx".to_string(),
            scripts: ManifestScripts {
                dev: "vite".to_string(),
                build: "vite build".to_string(),
                preview: "vite preview".to_string(),
            },
            dependencies,
        }
    }

    /// Pretty JSON with two-space indentation and no trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
