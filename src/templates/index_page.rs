use crate::render::escape_html;

/// Full lookup page. `address` is echoed back into the input, `results` is
/// the pre-rendered fragment for the results area (empty on a blank visit).
/// The inline script only toggles the indicator and swaps the fragment in;
/// all rendering policy stays on the server.
pub fn render(address: &str, results: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>walletcheck</title>
    <style>
        *, *::before, *::after {{ margin: 0; padding: 0; box-sizing: border-box; }}

        :root {{
            --bg: #ffffff;
            --bg-secondary: #f7f8fa;
            --border: #d8dce3;
            --border-light: #e8ebf0;
            --text-primary: #111827;
            --text-secondary: #4b5563;
            --text-tertiary: #9ca3af;
            --green: #16a34a;
            --amber: #d97706;
            --red: #dc2626;
            --link: #2563eb;
            --mono: 'SF Mono', 'Fira Code', 'JetBrains Mono', 'Cascadia Code', Menlo, monospace;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Inter', system-ui, sans-serif;
            background: var(--bg); color: var(--text-primary); min-height: 100vh;
            -webkit-font-smoothing: antialiased;
        }}

        .page {{ max-width: 600px; margin: 0 auto; padding: 3rem 1.25rem 4rem; }}

        .wordmark {{
            font-size: 1rem; font-weight: 600; color: var(--text-primary);
            text-decoration: none;
        }}
        .wordmark span {{ color: var(--text-tertiary); font-weight: 400; }}

        .lookup-form {{
            display: flex; gap: 0.5rem; margin: 1.5rem 0 1rem;
        }}
        #walletAddress {{
            flex: 1; padding: 0.5rem 0.75rem; font-family: var(--mono); font-size: 0.8125rem;
            border: 1px solid var(--border); border-radius: 6px; min-width: 0;
        }}
        #walletAddress:focus {{ outline: none; border-color: var(--link); }}
        #verifyButton {{
            flex-shrink: 0; padding: 0.5rem 1rem; font-size: 0.8125rem; font-weight: 500;
            color: #ffffff; background: var(--link); border: none; border-radius: 6px;
            cursor: pointer;
        }}
        #verifyButton:hover {{ opacity: 0.9; }}

        #loadingIndicator {{
            display: none; align-items: center; gap: 0.625rem;
            color: var(--text-secondary); font-size: 0.8125rem; margin-bottom: 1rem;
        }}
        .spinner {{
            width: 16px; height: 16px; border: 2px solid var(--border); border-top-color: var(--amber);
            border-radius: 50%; animation: spin 0.8s linear infinite; flex-shrink: 0;
        }}
        @keyframes spin {{ to {{ transform: rotate(360deg); }} }}

        .result-item {{
            border: 1px solid var(--border); border-radius: 8px; padding: 1rem;
        }}
        .result-item h3 {{
            font-size: 0.9375rem; font-weight: 600; margin-bottom: 0.75rem;
            word-break: break-all;
        }}
        .result-item p {{ font-size: 0.8125rem; padding: 0.25rem 0; word-break: break-all; }}
        .result-item ul {{ margin: 0.25rem 0 0 1.25rem; font-size: 0.8125rem; }}
        .label {{ color: var(--text-tertiary); }}
        .value-true {{ color: var(--red); font-weight: 600; }}
        .value-false {{ color: var(--green); font-weight: 600; }}
        .risk-critical, .risk-high {{ color: var(--red); font-weight: 600; }}
        .risk-medium {{ color: var(--amber); font-weight: 600; }}
        .risk-low {{ color: var(--green); font-weight: 600; }}
        .risk-unknown {{ color: var(--text-tertiary); font-weight: 600; }}

        .footer {{
            text-align: center; margin-top: 2.5rem; padding-top: 1.25rem;
            border-top: 1px solid var(--border-light); color: var(--text-tertiary); font-size: 0.75rem;
        }}
    </style>
</head>
<body>
    <div class="page">
        <a class="wordmark" href="/">walletcheck <span>/ wallet risk lookup</span></a>

        <form class="lookup-form" id="lookupForm" method="get" action="/">
            <input type="text" id="walletAddress" name="address" value="{address}"
                   placeholder="Enter wallet address" autocomplete="off">
            <button type="submit" id="verifyButton">Verify</button>
        </form>

        <div id="loadingIndicator" role="status">
            <div class="spinner"></div>
            <span>Checking address&hellip;</span>
        </div>

        <div id="resultsArea">{results}</div>

        <div class="footer">Risk data is provided by the configured verification service.</div>
    </div>

    <script>
        const form = document.getElementById('lookupForm');
        const input = document.getElementById('walletAddress');
        const resultsArea = document.getElementById('resultsArea');
        const loadingIndicator = document.getElementById('loadingIndicator');

        form.addEventListener('submit', async (event) => {{
            event.preventDefault();
            loadingIndicator.style.display = 'flex';
            resultsArea.innerHTML = '';
            try {{
                const response = await fetch(`/lookup?address=${{encodeURIComponent(input.value)}}`);
                resultsArea.innerHTML = await response.text();
            }} catch (error) {{
                resultsArea.innerHTML = '<p style="color: #ff7979;">Error: verification request failed.</p>';
                console.error('Verification error:', error);
            }} finally {{
                loadingIndicator.style.display = 'none';
            }}
        }});
    </script>
</body>
</html>"#,
        address = escape_html(address),
        results = results,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_the_host_elements() {
        let html = render("", "");
        for id in [
            "id=\"walletAddress\"",
            "id=\"verifyButton\"",
            "id=\"resultsArea\"",
            "id=\"loadingIndicator\"",
        ] {
            assert!(html.contains(id), "missing {}", id);
        }
    }

    #[test]
    fn echoed_address_is_escaped() {
        let html = render("\"><script>alert(1)</script>", "");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn results_fragment_is_embedded_verbatim() {
        let html = render("abc", "<div class=\"result-item\">ok</div>");
        assert!(html.contains("<div id=\"resultsArea\"><div class=\"result-item\">ok</div></div>"));
    }
}
