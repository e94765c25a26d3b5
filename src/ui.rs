pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Visit Log Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f6;
      --bg-2: #c9dde6;
      --ink: #1f2a30;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #f7fafb 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .dashboard {
      width: min(980px, 100%);
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .card.message {
      text-align: center;
      color: #6b645d;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .total .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .total .value {
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    select,
    input[type="date"] {
      font: inherit;
      padding: 8px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    svg {
      width: 100%;
      display: block;
    }

    svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 10px 18px;
      font-size: 0.85rem;
      color: #5f5c57;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      margin-right: 6px;
      border-radius: 3px;
      background: var(--swatch);
    }
  </style>
</head>
<body>
  <main class="dashboard" id="dashboard">
    <section class="card">
      <h1>Visit Log</h1>
      <div class="total">
        <span class="label">Total visits</span>
        <div class="value" id="total-views">...</div>
      </div>
    </section>

    <section class="card">
      <div class="controls">
        <h2>Visits by hour</h2>
        <input type="date" id="date-picker" value="{{TODAY}}" />
      </div>
      <svg id="hourly-chart" viewBox="0 0 900 320" role="img" aria-label="Hourly visits"></svg>
      <div class="legend" id="hourly-legend"></div>
    </section>

    <section class="card">
      <div class="controls">
        <h2>Visits by detail</h2>
        <select id="channel-select"></select>
        <select id="device-select">
          <option value="all">All devices</option>
        </select>
        <select id="mode-select">
          <option value="total">Total</option>
          <option value="device">By device</option>
        </select>
      </div>
      <svg id="detail-chart" viewBox="0 0 900 200" role="img" aria-label="Visits by detail"></svg>
      <div class="legend" id="detail-legend"></div>
    </section>
  </main>

  <script>
    const PALETTE = ['#ff6b4a', '#2f4858', '#33658a', '#86bbd8', '#f6ae2d', '#758e4f', '#9b5de5', '#e07a5f'];
    const dashboardEl = document.getElementById('dashboard');
    const totalEl = document.getElementById('total-views');
    const datePicker = document.getElementById('date-picker');
    const channelSelect = document.getElementById('channel-select');
    const modeSelect = document.getElementById('mode-select');
    const deviceSelect = document.getElementById('device-select');
    const hourlyChartEl = document.getElementById('hourly-chart');
    const hourlyLegendEl = document.getElementById('hourly-legend');
    const detailChartEl = document.getElementById('detail-chart');
    const detailLegendEl = document.getElementById('detail-legend');
    const tzOffsetMinutes = -new Date().getTimezoneOffset();
    // Entry count at page load; every chart is drawn from that many entries.
    let loadedTotal = 0;

    const escapeXml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[ch]));

    const showMessage = (message) => {
      dashboardEl.innerHTML = `<div class="card message">${escapeXml(message)}</div>`;
    };

    const fetchJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error(`Request to ${url} failed`);
      }
      return res.json();
    };

    // Each canvas holds a single chart; drawing replaces whatever was there.
    const replaceChart = (svgEl, legendEl, markup, series) => {
      svgEl.innerHTML = markup;
      legendEl.innerHTML = series
        .map((item, index) => `<span style="--swatch: ${PALETTE[index % PALETTE.length]}">${escapeXml(item.label)}</span>`)
        .join('');
    };

    const renderHourly = (chart) => {
      const width = 900;
      const height = 320;
      const left = 40;
      const bottom = 30;
      const top = 16;
      const totals = chart.labels.map((_, hour) => chart.series.reduce((sum, s) => sum + s.counts[hour], 0));
      const max = Math.max(1, ...totals);
      const slot = (width - left - 10) / chart.labels.length;
      const scale = (height - top - bottom) / max;

      let markup = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = Math.round((max * i) / 4);
        const y = height - bottom - value * scale;
        markup += `<line class="chart-grid" x1="${left}" y1="${y}" x2="${width - 10}" y2="${y}" />`;
        markup += `<text class="chart-label" x="${left - 8}" y="${y + 4}" text-anchor="end">${value}</text>`;
      }

      chart.labels.forEach((label, hour) => {
        const x = left + hour * slot + slot * 0.15;
        let y = height - bottom;
        chart.series.forEach((series, index) => {
          const barHeight = series.counts[hour] * scale;
          if (barHeight > 0) {
            y -= barHeight;
            markup += `<rect x="${x}" y="${y}" width="${slot * 0.7}" height="${barHeight}" fill="${PALETTE[index % PALETTE.length]}"><title>${escapeXml(series.label)}: ${series.counts[hour]}</title></rect>`;
          }
        });
        if (hour % 2 === 0) {
          markup += `<text class="chart-label" x="${x + slot * 0.35}" y="${height - bottom + 16}" text-anchor="middle">${label}</text>`;
        }
      });

      if (!chart.series.length) {
        markup += `<text class="chart-label" x="50%" y="50%" text-anchor="middle">No visits on ${escapeXml(chart.date)}</text>`;
      }
      replaceChart(hourlyChartEl, hourlyLegendEl, markup, chart.series);
    };

    const renderDetail = (chart) => {
      const rowHeight = 26;
      const left = 180;
      const width = 900;
      const height = Math.max(80, chart.labels.length * rowHeight + 20);
      const totals = chart.labels.map((_, row) => chart.series.reduce((sum, s) => sum + s.counts[row], 0));
      const max = Math.max(1, ...totals);
      const scale = (width - left - 50) / max;

      let markup = '';
      chart.labels.forEach((label, row) => {
        const y = 10 + row * rowHeight;
        let x = left;
        markup += `<text class="chart-label" x="${left - 8}" y="${y + rowHeight / 2 + 4}" text-anchor="end">${escapeXml(label)}</text>`;
        chart.series.forEach((series, index) => {
          const barWidth = series.counts[row] * scale;
          if (barWidth > 0) {
            markup += `<rect x="${x}" y="${y + 3}" width="${barWidth}" height="${rowHeight - 6}" fill="${PALETTE[index % PALETTE.length]}"><title>${escapeXml(series.label)}: ${series.counts[row]}</title></rect>`;
            x += barWidth;
          }
        });
        markup += `<text class="chart-label" x="${x + 6}" y="${y + rowHeight / 2 + 4}">${totals[row]}</text>`;
      });

      if (!chart.labels.length) {
        markup += '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No visits for this selection</text>';
      }
      detailChartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      replaceChart(detailChartEl, detailLegendEl, markup, chart.series);
    };

    const loadHourly = async () => {
      if (!datePicker.value) {
        return;
      }
      const params = new URLSearchParams({
        date: datePicker.value,
        tz_offset_minutes: String(tzOffsetMinutes),
        upto: String(loadedTotal)
      });
      renderHourly(await fetchJson(`/api/hourly?${params}`));
    };

    const loadDetail = async () => {
      const params = new URLSearchParams({
        channel: channelSelect.value,
        mode: modeSelect.value,
        device: deviceSelect.value,
        upto: String(loadedTotal)
      });
      renderDetail(await fetchJson(`/api/detail?${params}`));
    };

    const onFailure = (err) => {
      console.error(err);
      showMessage('Failed to load visit data.');
    };

    const start = async () => {
      const overview = await fetchJson('/api/overview');
      if (!overview.total) {
        showMessage('No visits to display yet.');
        return;
      }

      loadedTotal = overview.total;
      totalEl.textContent = overview.total.toLocaleString();
      const addOptions = (selectEl, values) => {
        values.forEach((value) => {
          const option = document.createElement('option');
          option.value = value;
          option.textContent = value;
          selectEl.appendChild(option);
        });
      };
      addOptions(channelSelect, overview.channels);
      addOptions(deviceSelect, overview.devices);

      await Promise.all([loadHourly(), loadDetail()]);

      datePicker.addEventListener('change', () => loadHourly().catch(onFailure));
      channelSelect.addEventListener('change', () => loadDetail().catch(onFailure));
      modeSelect.addEventListener('change', () => loadDetail().catch(onFailure));
      deviceSelect.addEventListener('change', () => loadDetail().catch(onFailure));
    };

    start().catch(onFailure);
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_fills_in_today() {
        let html = render_index("2024-01-01");
        assert!(html.contains(r#"value="2024-01-01""#));
        assert!(!html.contains("{{TODAY}}"));
    }

    #[test]
    fn index_offers_device_filter_and_pins_loaded_total() {
        let html = render_index("2024-01-01");
        assert!(html.contains(r#"<select id="device-select">"#));
        assert!(html.contains(r#"<option value="all">All devices</option>"#));
        assert!(html.contains("device: deviceSelect.value"));
        assert_eq!(html.matches("upto: String(loadedTotal)").count(), 2);
    }

    #[test]
    fn index_skips_hourly_request_without_date() {
        let html = render_index("2024-01-01");
        assert!(html.contains("if (!datePicker.value) {"));
    }
}
